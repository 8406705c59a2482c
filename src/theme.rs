use crate::constants::{THEME_ATTRIBUTE, THEME_TOGGLE_ID, THEME_TRANSITION, THEME_TRANSITION_MS};
use crate::core::{toggle_theme, Theme, ThemeStore};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `window.localStorage`, treated as empty when the browser denies access.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            _ = storage.set_item(key, value);
        }
    }
}

fn theme_icon(document: &web::Document) -> Option<web::Element> {
    document
        .get_element_by_id(THEME_TOGGLE_ID)?
        .query_selector("i")
        .ok()
        .flatten()
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(icon) = theme_icon(document) {
        icon.set_class_name(theme.icon_class());
    }
}

pub fn current(document: &web::Document) -> Theme {
    let value = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    Theme::from_stored(value.as_deref())
}

/// Apply the persisted theme and wire the toggle control.
pub fn wire_theme_toggle(document: &web::Document) {
    let store = LocalStore::open();
    apply(document, store.load_theme());

    let Some(toggle) = dom::query(document, &format!("#{THEME_TOGGLE_ID}")) else {
        return;
    };
    let doc = document.clone();
    let mut store = store;
    dom::add_click_listener(&toggle, move || {
        let next = toggle_theme(&mut store, current(&doc));
        apply(&doc, next);
        log::debug!("[theme] switched to {}", next.as_str());

        let Some(root) = doc
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        dom::set_style(&root, "transition", THEME_TRANSITION);
        dom::set_timeout(THEME_TRANSITION_MS, move || {
            _ = root.style().remove_property("transition");
        });
    });
}
