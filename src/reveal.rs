use crate::constants::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade designated blocks in the first time they scroll into view.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    dom::set_style(el, "opacity", "1");
                    dom::set_style(el, "transform", "translateY(0)");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &format!("translateY({REVEAL_OFFSET_PX}px)"));
        dom::set_style(el, "transition", "all 0.6s ease");
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
