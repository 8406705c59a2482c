// Browser tests for DOM-facing effects; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use glam::Vec2;
use landing_fx::{
    apply_theme, current_theme, spawn_burst, spawn_wand, wire_reveal, wire_theme_toggle,
    BurstKind, Theme,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn attached(nodes: &[web_sys::HtmlElement]) -> usize {
    let body = document().body().unwrap();
    nodes
        .iter()
        .filter(|n| {
            let node: &web_sys::Node = n;
            body.contains(Some(node))
        })
        .count()
}

#[wasm_bindgen_test]
async fn message_burst_cleans_up_after_lifetime() {
    let doc = document();
    let nodes = spawn_burst(&doc, BurstKind::Message, Vec2::new(40.0, 40.0));
    assert_eq!(nodes.len(), 8);
    assert_eq!(attached(&nodes), 8);

    sleep(BurstKind::Message.removal_ms() + 100).await;
    assert_eq!(attached(&nodes), 0);
}

#[wasm_bindgen_test]
async fn button_burst_and_wand_clean_up() {
    let doc = document();
    let nodes = spawn_burst(&doc, BurstKind::Button, Vec2::new(100.0, 100.0));
    let wand = spawn_wand(&doc, Vec2::new(100.0, 100.0)).unwrap();
    assert_eq!(nodes.len(), 15);
    assert_eq!(attached(&nodes), 15);

    sleep(BurstKind::Button.removal_ms() + 100).await;
    assert_eq!(attached(&nodes), 0);
    let wand: &web_sys::Node = &wand;
    assert!(!doc.body().unwrap().contains(Some(wand)));
}

#[wasm_bindgen_test]
fn applied_theme_is_read_back() {
    let doc = document();
    apply_theme(&doc, Theme::Light);
    assert_eq!(current_theme(&doc), Theme::Light);
    assert_eq!(
        doc.document_element().unwrap().get_attribute("data-theme").as_deref(),
        Some("light")
    );
    apply_theme(&doc, Theme::Dark);
    assert_eq!(current_theme(&doc), Theme::Dark);
}

fn storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn html(doc: &web_sys::Document, markup: &str) -> web_sys::HtmlElement {
    let holder = doc.create_element("div").unwrap();
    holder.set_inner_html(markup);
    let el = holder
        .first_element_child()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn style(el: &web_sys::HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
async fn theme_toggle_click_flow_round_trips() {
    let doc = document();
    storage().remove_item("theme").unwrap();
    let toggle = html(&doc, r#"<button id="themeToggle"><i></i></button>"#);
    let icon = toggle.query_selector("i").unwrap().unwrap();
    let root = doc
        .document_element()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();

    wire_theme_toggle(&doc);
    assert_eq!(current_theme(&doc), Theme::Dark);
    assert_eq!(icon.class_name(), "fas fa-sun");

    toggle.click();
    assert_eq!(current_theme(&doc), Theme::Light);
    assert_eq!(storage().get_item("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(icon.class_name(), "fas fa-moon");
    assert!(!style(&root, "transition").is_empty());

    toggle.click();
    assert_eq!(current_theme(&doc), Theme::Dark);
    assert_eq!(storage().get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(icon.class_name(), "fas fa-sun");

    sleep(350).await;
    assert_eq!(style(&root, "transition"), "");

    toggle.remove();
    storage().remove_item("theme").unwrap();
}

#[wasm_bindgen_test]
async fn reveal_shows_target_once_in_view() {
    let doc = document();
    let card = html(
        &doc,
        r#"<div class="feature-card" style="position:fixed;top:0;left:0;width:200px;height:120px"></div>"#,
    );

    wire_reveal(&doc).unwrap();
    assert_eq!(style(&card, "opacity"), "0");
    assert_eq!(style(&card, "transform"), "translateY(30px)");

    sleep(300).await;
    assert_eq!(style(&card, "opacity"), "1");
    assert_ne!(style(&card, "transform"), "translateY(30px)");

    // Hide and show again: the element is no longer observed
    card.style().set_property("display", "none").unwrap();
    sleep(200).await;
    card.style().set_property("opacity", "0").unwrap();
    card.style().set_property("display", "block").unwrap();
    sleep(300).await;
    assert_eq!(style(&card, "opacity"), "0");

    card.remove();
}
