use crate::animate::Animator;
use crate::constants::{ABOUT_SECTION_SELECTOR, ABOUT_TARGET_ID};
use crate::core::{TypedQuote, TypedToken, ABOUT_TEXT, TYPING_INTERVAL_MS};
use crate::{dom, reveals};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arm the about section: when it scrolls into view, type the quote into
/// `#about-typed` and reveal the portrait. Does nothing if either element is
/// missing.
pub fn wire_about(document: &web::Document, animator: &Rc<RefCell<Animator>>) {
    let (Some(section), Some(target)) = (
        dom::query(document, ABOUT_SECTION_SELECTOR),
        document.get_element_by_id(ABOUT_TARGET_ID),
    ) else {
        log::info!("[about] section or #{} absent; typing disabled", ABOUT_TARGET_ID);
        return;
    };

    let quote = Rc::new(RefCell::new(TypedQuote::new(ABOUT_TEXT)));
    let on_enter = Box::new(move || {
        if quote.borrow_mut().start() {
            log::info!("[about] typing started");
            start_typing(target, quote);
        }
    });
    reveals::about_reveal(&mut animator.borrow_mut(), document, section, on_enter);
}

/// Append the first token straight away, then one per tick until the quote
/// is exhausted or the target is detached from the document.
fn start_typing(target: web::Element, quote: Rc<RefCell<TypedQuote>>) {
    if !type_next(&target, &quote) {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if type_next(&target, &quote) {
            schedule(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

/// Appends one token. Returns whether another tick is needed.
fn type_next(target: &web::Element, quote: &RefCell<TypedQuote>) -> bool {
    if !target.is_connected() {
        log::debug!("[about] target detached; typing cancelled");
        return false;
    }
    let mut quote = quote.borrow_mut();
    match quote.next_token() {
        Some(TypedToken::Char(c)) => {
            _ = target.append_with_str_1(c.encode_utf8(&mut [0u8; 4]));
        }
        Some(TypedToken::LineBreak) => {
            if let Some(br) = target
                .owner_document()
                .and_then(|d| d.create_element("br").ok())
            {
                _ = target.append_with_node_1(&br);
            }
        }
        None => return false,
    }
    if quote.is_done() {
        log::info!("[about] typing finished");
        return false;
    }
    true
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            TYPING_INTERVAL_MS,
        );
    }
}
