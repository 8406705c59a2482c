use crate::constants::{
    TITLE_SELECTOR, TYPEWRITER_CARET, TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS,
};
use crate::core::{completion_ms, Typewriter};
use crate::dom;
use web_sys as web;

/// Retype the hero heading one character at a time behind a caret.
pub fn wire_typewriter(document: &web::Document) {
    let Some(heading) = dom::query(document, TITLE_SELECTOR) else {
        return;
    };
    let text = heading.text_content().unwrap_or_default();
    heading.set_text_content(Some(""));
    dom::set_style(&heading, "border-right", TYPEWRITER_CARET);

    let writer = Typewriter::new(&text);
    log::debug!(
        "[title] typing {} chars over {}ms",
        writer.char_count(),
        completion_ms(writer.char_count())
    );
    dom::set_timeout(TYPEWRITER_START_DELAY_MS as i32, move || {
        type_next(heading, writer);
    });
}

fn type_next(heading: web::HtmlElement, mut writer: Typewriter) {
    match writer.advance() {
        Some(_) => {
            heading.set_text_content(Some(&writer.visible()));
            dom::set_timeout(TYPEWRITER_CHAR_INTERVAL_MS as i32, move || {
                type_next(heading, writer);
            });
        }
        None => dom::set_style(&heading, "border-right", "none"),
    }
}
