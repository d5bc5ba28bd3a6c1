use crate::constants::{CARD_INNER_SELECTOR, HACK_CARD_SELECTOR};
use crate::core::{card_rotation, CardRotation, FrameState};
use crate::{dom, input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the hero region as the shader's ripple centre.
pub fn wire_hero_pointer(hero_right: &web::Element, state: Rc<RefCell<FrameState>>) {
    let region = hero_right.clone();
    dom::add_listener(hero_right, "mousemove", move |ev: web::MouseEvent| {
        let (cx, cy) = input::client_pos(&ev);
        let rect = dom::client_rect(&region);
        state
            .borrow_mut()
            .pointer
            .set_target_from_client(cx, cy, rect);
    });
}

/// Tilt and flip each hackathon card's inner face toward the pointer.
/// Returns the number of cards wired.
pub fn wire_card_tilt(document: &web::Document) -> usize {
    let mut wired = 0;
    for card in dom::query_all(document, HACK_CARD_SELECTOR) {
        let Some(inner) = dom::query_in(&card, CARD_INNER_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            log::warn!("[cards] {} without {}", HACK_CARD_SELECTOR, CARD_INNER_SELECTOR);
            continue;
        };

        let card_move = card.clone();
        let inner_move = inner.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let (x, y, rect) = input::pointer_local(&ev, &card_move);
            let rot = card_rotation(rect.width, rect.height, x, y);
            dom::set_transform(&inner_move, &rot.to_css());
        });

        dom::add_listener(&card, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_transform(&inner, &CardRotation::NEUTRAL.to_css());
        });
        wired += 1;
    }
    wired
}
