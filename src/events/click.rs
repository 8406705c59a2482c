use crate::burst::{spawn_burst, spawn_wand};
use crate::constants::{
    ANCHOR_SELECTOR, BURST_BUTTON_SELECTOR, LOADING_CLASS, MESSAGE_CLICK_RESTORE_MS,
    MESSAGE_SELECTOR, SPARKLE_CHANCE, SPARKLE_HOLD_MS, SPARKLE_INTERVAL_MS, SUBMIT_SELECTOR,
};
use crate::core::BurstKind;
use crate::dom;
use glam::Vec2;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

const MESSAGE_GLOW: &str = "0 0 10px var(--accent-color)";

/// Ambient sparkle plus a click burst on every floating message.
pub fn wire_floating_messages(document: &web::Document) {
    for message in dom::query_all(document, MESSAGE_SELECTOR) {
        let target = message.clone();
        dom::set_interval(SPARKLE_INTERVAL_MS, move || {
            if !rand::thread_rng().gen_bool(SPARKLE_CHANCE) {
                return;
            }
            dom::set_style(&target, "text-shadow", "0 0 20px var(--accent-color)");
            dom::set_style(&target, "transform", "scale(1.1)");
            let target = target.clone();
            dom::set_timeout(SPARKLE_HOLD_MS, move || {
                dom::set_style(&target, "text-shadow", MESSAGE_GLOW);
                dom::set_style(&target, "transform", "scale(1)");
            });
        });

        let doc = document.clone();
        let target = message.clone();
        dom::add_click_listener(&message, move || {
            dom::set_style(&target, "transform", "scale(1.5) rotate(360deg)");
            dom::set_style(&target, "text-shadow", "0 0 30px var(--accent-color)");

            let origin = Vec2::new(
                target.offset_left() as f32 + target.offset_width() as f32 / 2.0,
                target.offset_top() as f32 + target.offset_height() as f32 / 2.0,
            );
            spawn_burst(&doc, BurstKind::Message, origin);

            let target = target.clone();
            dom::set_timeout(MESSAGE_CLICK_RESTORE_MS, move || {
                dom::set_style(&target, "transform", "scale(1) rotate(0deg)");
                dom::set_style(&target, "text-shadow", MESSAGE_GLOW);
            });
        });
    }
}

/// Sparkle burst and wand overlay from the centre of call-to-action buttons.
pub fn wire_button_bursts(window: &web::Window, document: &web::Document) {
    for button in dom::query_all(document, BURST_BUTTON_SELECTOR) {
        let doc = document.clone();
        let wnd = window.clone();
        let target = button.clone();
        dom::add_click_listener(&button, move || {
            let center = dom::client_rect(&target).center();
            let scroll = Vec2::new(
                wnd.scroll_x().unwrap_or(0.0) as f32,
                wnd.scroll_y().unwrap_or(0.0) as f32,
            );
            let origin = center + scroll;
            spawn_burst(&doc, BurstKind::Button, origin);
            spawn_wand(&doc, origin);
        });
    }
}

/// Smoothly scroll in-page anchors to their fragment target.
pub fn wire_smooth_anchors(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let anchor = link.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector
            let Ok(Some(section)) = doc.query_selector(&href) else {
                return;
            };
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            options.set_block(web::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

/// Mark the submit button of a form as loading once the form is submitted.
pub fn wire_form_loading(document: &web::Document) {
    for form in dom::query_all(document, "form") {
        let target = form.clone();
        dom::add_listener(&form, "submit", move |_: web::Event| {
            let Ok(Some(button)) = target.query_selector(SUBMIT_SELECTOR) else {
                return;
            };
            _ = button.class_list().add_1(LOADING_CLASS);
            if let Some(button) = button.dyn_ref::<web::HtmlButtonElement>() {
                button.set_disabled(true);
            }
        });
    }
}
