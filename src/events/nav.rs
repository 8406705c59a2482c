use crate::constants::{NAVBAR_SELECTOR, NAV_BRAND_SELECTOR, NAV_LINK_SELECTOR};
use crate::core::{
    nav_glow, nearest, NavItemKind, Rect, NEUTRAL_FILTER, NEUTRAL_TEXT_SHADOW, NEUTRAL_TRANSFORM,
};
use crate::dom;
use glam::Vec2;
use smallvec::SmallVec;
use std::rc::Rc;
use web_sys as web;

struct NavItem {
    el: web::HtmlElement,
    kind: NavItemKind,
}

fn reset(items: &[NavItem]) {
    for item in items {
        dom::set_style(&item.el, "transform", NEUTRAL_TRANSFORM);
        dom::set_style(&item.el, "text-shadow", NEUTRAL_TEXT_SHADOW);
        dom::set_style(&item.el, "filter", NEUTRAL_FILTER);
    }
}

/// Scale and glow the navbar text nearest the pointer.
pub fn wire_navbar_proximity(document: &web::Document, mobile: bool) {
    if mobile {
        return;
    }
    let Some(navbar) = dom::query(document, NAVBAR_SELECTOR) else {
        return;
    };

    let mut items: Vec<NavItem> = dom::query_all_in(&navbar, NAV_LINK_SELECTOR)
        .into_iter()
        .map(|el| NavItem {
            el,
            kind: NavItemKind::Link,
        })
        .collect();
    if let Some(brand) = dom::query_in(&navbar, NAV_BRAND_SELECTOR) {
        items.push(NavItem {
            el: brand,
            kind: NavItemKind::Brand,
        });
    }
    let items = Rc::new(items);

    let on_move = items.clone();
    dom::add_listener(&navbar, "mousemove", move |ev: web::MouseEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rects: SmallVec<[Rect; 8]> =
            on_move.iter().map(|item| dom::client_rect(&item.el)).collect();
        reset(&on_move);
        let Some((i, distance)) = nearest(pointer, rects) else {
            return;
        };
        let item = &on_move[i];
        if let Some(glow) = nav_glow(item.kind, distance) {
            dom::set_style(&item.el, "transform", &glow.transform());
            dom::set_style(&item.el, "text-shadow", &glow.text_shadow());
            dom::set_style(&item.el, "filter", &glow.filter());
        }
    });

    let on_leave = items.clone();
    dom::add_listener(&navbar, "mouseleave", move |_: web::MouseEvent| {
        reset(&on_leave);
    });
    log::info!("[nav] proximity effect on {} items", items.len());
}
