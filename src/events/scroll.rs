use crate::constants::{BLOB_SELECTOR, MESSAGE_SELECTOR};
use crate::core::{blob_transform, message_transform};
use crate::dom;
use web_sys as web;

/// Shift background decoration in proportion to the vertical scroll offset.
pub fn wire_parallax(window: &web::Window, document: &web::Document) {
    let blobs = dom::query_all(document, BLOB_SELECTOR);
    let messages = dom::query_all(document, MESSAGE_SELECTOR);
    if blobs.is_empty() && messages.is_empty() {
        return;
    }

    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let scrolled = wnd.scroll_y().unwrap_or(0.0);
        for (i, blob) in blobs.iter().enumerate() {
            dom::set_style(blob, "transform", &blob_transform(scrolled, i));
        }
        for (i, message) in messages.iter().enumerate() {
            dom::set_style(message, "transform", &message_transform(scrolled, i));
        }
    });
}
