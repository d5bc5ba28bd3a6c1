#![cfg(target_arch = "wasm32")]
use crate::core::FrameState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod about;
mod animate;
mod avatar;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod reveals;

use animate::Animator;
use constants::{HERO_CANVAS_ID, HERO_LEFT_SELECTOR, HERO_RIGHT_SELECTOR};

struct Hero {
    canvas: web::HtmlCanvasElement,
    right: web::Element,
}

fn find_hero(document: &web::Document) -> anyhow::Result<Hero> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(HERO_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let right = dom::query(document, HERO_RIGHT_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", HERO_RIGHT_SELECTOR))?;
    Ok(Hero { canvas, right })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let state = Rc::new(RefCell::new(FrameState::default()));
    let animator = Rc::new(RefCell::new(Animator::new()));
    let avatar_slot: avatar::AvatarSlot = Rc::new(RefCell::new(None));

    // ---------------- DOM-only effects ----------------
    let hero_left = dom::query(&document, HERO_LEFT_SELECTOR);
    match &hero_left {
        Some(el) => reveals::hero_entrance(&mut animator.borrow_mut(), el),
        None => log::warn!("missing {}; hero entrance skipped", HERO_LEFT_SELECTOR),
    }
    let projects = reveals::project_reveals(&mut animator.borrow_mut(), &document);
    log::info!("[reveal] {} projects registered", projects);

    events::wire_scroll(events::ScrollWiring {
        state: state.clone(),
        animator: animator.clone(),
        hero_left: hero_left.and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
    });

    // The typed quote waits for the full page load, which may already be over
    if document.ready_state() == "complete" {
        about::wire_about(&document, &animator);
    } else {
        let document = document.clone();
        let animator = animator.clone();
        dom::add_listener(&window, "load", move |_ev: web::Event| {
            about::wire_about(&document, &animator);
        });
    }

    let cards = events::wire_card_tilt(&document);
    log::info!("[cards] {} cards wired", cards);

    if let Err(e) = contact::wire_contact_form(&document) {
        log::warn!("[contact] {:?}", e);
    }

    // ---------------- Hero scene ----------------
    let (canvas, gpu) = match find_hero(&document) {
        Ok(hero) => {
            events::wire_resize(&hero.canvas, &hero.right);
            events::wire_hero_pointer(&hero.right, state.clone());
            avatar::spawn_avatar_load(document.clone(), avatar_slot.clone());
            let gpu = frame::init_gpu(&hero.canvas).await;
            (Some(hero.canvas), gpu)
        }
        Err(e) => {
            log::error!("hero background disabled: {:?}", e);
            (None, None)
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas,
        gpu,
        state,
        animator.clone(),
        avatar_slot,
    )));
    log::info!(
        "[frame] loop starting with {} animation groups pending",
        animator.borrow().pending()
    );
    frame::start_loop(frame_ctx);

    Ok(())
}
