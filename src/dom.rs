use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_: web::Event| handler());
}

pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) =
            w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        {
            log::warn!("[dom] setTimeout failed: {:?}", e);
        }
    }
}

pub fn set_interval(period_ms: i32, f: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        if let Err(e) = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            log::warn!("[dom] setInterval failed: {:?}", e);
        }
        closure.forget();
    }
}

/// Detach `node` from the body if it is still attached.
pub fn detach_from_body(document: &web::Document, node: &web::Node) {
    if let Some(body) = document.body() {
        if body.contains(Some(node)) {
            _ = body.remove_child(node);
        }
    }
}

/// Viewport width in CSS pixels, `0.0` when unavailable.
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

pub fn client_rect(el: &web::Element) -> crate::core::Rect {
    let r = el.get_bounding_client_rect();
    crate::core::Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}
