#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod burst;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod reveal;
mod theme;
mod title;

pub use burst::{spawn_burst, spawn_wand};
pub use crate::core::{BurstKind, Theme};
pub use reveal::wire_reveal;
pub use theme::{apply as apply_theme, current as current_theme, wire_theme_toggle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Err(JsValue::from_str("no document"));
    };
    if document.ready_state() == "loading" {
        let once = Closure::once_into_js(run);
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mobile = crate::core::is_mobile(&dom::user_agent(&window), dom::viewport_width(&window));
    log::info!("[init] mobile={}", mobile);

    events::wire_pointer_follower(&document, mobile);
    theme::wire_theme_toggle(&document);
    events::wire_parallax(&window, &document);
    events::wire_floating_messages(&document);
    if let Err(e) = reveal::wire_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    title::wire_typewriter(&document);
    events::wire_card_tilt(&document);
    events::wire_button_bursts(&window, &document);
    events::wire_smooth_anchors(&document);
    events::wire_form_loading(&document);
    events::wire_navbar_proximity(&document, mobile);
    Ok(())
}
