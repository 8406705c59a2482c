use crate::constants::{
    BURST_CLASS, BURST_LAUNCH_DELAY_MS, WAND_GLYPH, WAND_GROW_DELAY_MS, WAND_HOLD_MS,
    WAND_SHRINK_MS,
};
use crate::core::{plan_burst, BurstKind};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_decoration(
    document: &web::Document,
    glyph: &str,
    origin: Vec2,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(BURST_CLASS);
    el.set_text_content(Some(glyph));
    dom::set_style(&el, "position", "absolute");
    dom::set_style(&el, "pointer-events", "none");
    dom::set_style(&el, "left", &format!("{}px", origin.x));
    dom::set_style(&el, "top", &format!("{}px", origin.y));
    Some(el)
}

/// Spawn one burst centred on `origin` (document coordinates). Every
/// particle detaches itself `kind.removal_ms()` after the call.
pub fn spawn_burst(
    document: &web::Document,
    kind: BurstKind,
    origin: Vec2,
) -> Vec<web::HtmlElement> {
    let Some(body) = document.body() else {
        return Vec::new();
    };
    let particles = plan_burst(kind, &mut rand::thread_rng());
    let mut spawned = Vec::with_capacity(particles.len());
    for particle in particles {
        let Some(el) = create_decoration(document, particle.glyph, origin) else {
            continue;
        };
        dom::set_style(&el, "font-size", kind.font_size());
        dom::set_style(&el, "z-index", kind.z_index());
        dom::set_style(&el, "transform", "translate(-50%, -50%)");
        dom::set_style(&el, "transition", &kind.transition());
        if body.append_child(&el).is_err() {
            continue;
        }

        let doc = document.clone();
        let node = el.clone();
        dom::set_timeout(BURST_LAUNCH_DELAY_MS, move || {
            dom::set_style(&node, "transform", &particle.launch_transform());
            dom::set_style(&node, "opacity", "0");
        });
        let node = el.clone();
        dom::set_timeout(kind.removal_ms(), move || {
            dom::detach_from_body(&doc, &node);
        });
        spawned.push(el);
    }
    spawned
}

/// One spinning wand glyph that grows, turns twice and shrinks away.
pub fn spawn_wand(document: &web::Document, origin: Vec2) -> Option<web::HtmlElement> {
    let body = document.body()?;
    let el = create_decoration(document, WAND_GLYPH, origin)?;
    dom::set_style(&el, "font-size", "3rem");
    dom::set_style(&el, "z-index", "9999");
    dom::set_style(&el, "transform", "translate(-50%, -50%) scale(0)");
    dom::set_style(&el, "transition", "all 0.5s ease");
    body.append_child(&el).ok()?;

    let doc = document.clone();
    let node = el.clone();
    dom::set_timeout(WAND_GROW_DELAY_MS, move || {
        dom::set_style(&node, "transform", "translate(-50%, -50%) scale(1) rotate(360deg)");
        dom::set_timeout(WAND_HOLD_MS, move || {
            dom::set_style(&node, "transform", "translate(-50%, -50%) scale(0) rotate(720deg)");
            dom::set_timeout(WAND_SHRINK_MS, move || {
                dom::detach_from_body(&doc, &node);
            });
        });
    });
    Some(el)
}
