use crate::constants::{
    CARD_SELECTOR, FOLLOWER_HOVER_SELECTOR, FOLLOWER_REVEAL_DELAY_MS, FOLLOWER_SELECTOR,
};
use crate::core::{tilt_reset, tilt_transform, Follower};
use crate::dom;
use crate::frame::{self, FrameContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Trail the pointer with the follower element. Skipped on mobile or when
/// the page has no follower.
pub fn wire_pointer_follower(document: &web::Document, mobile: bool) {
    if mobile {
        return;
    }
    let Some(element) = dom::query(document, FOLLOWER_SELECTOR) else {
        return;
    };
    dom::set_style(&element, "display", "block");

    let follower = Rc::new(RefCell::new(Follower::default()));

    let fm = follower.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        fm.borrow_mut()
            .record_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    let hover_targets = dom::query_all(document, FOLLOWER_HOVER_SELECTOR);
    for target in &hover_targets {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let fh = follower.clone();
            let el = element.clone();
            dom::add_listener(target, event, move |_: web::MouseEvent| {
                let transform = {
                    let mut f = fh.borrow_mut();
                    if entering {
                        f.enter_hover();
                    } else {
                        f.leave_hover();
                    }
                    f.transform()
                };
                dom::set_style(&el, "transform", &transform);
                dom::set_style(&el, "opacity", "1");
            });
        }
    }

    frame::start_loop(Rc::new(RefCell::new(FrameContext {
        follower,
        element: element.clone(),
    })));

    dom::set_timeout(FOLLOWER_REVEAL_DELAY_MS, move || {
        dom::set_style(&element, "opacity", "1");
    });
    log::info!("[pointer] follower active, {} hover targets", hover_targets.len());
}

/// Tilt cards toward the pointer while it moves over them.
pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let target = card.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let transform = tilt_transform(x, y, rect.width(), rect.height());
            dom::set_style(&target, "transform", &transform);
        });

        let target = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", &tilt_reset());
        });
    }
}
