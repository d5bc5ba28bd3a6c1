use crate::animate::Animator;
use crate::core::{hero_parallax_px, FrameState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub state: Rc<RefCell<FrameState>>,
    pub animator: Rc<RefCell<Animator>>,
    pub hero_left: Option<web::HtmlElement>,
}

/// Scroll drives the plane depth uniform, the hero copy parallax and the
/// reveal triggers. Depth is taken straight from the scroll offset. A resize
/// moves trigger elements too, so it re-checks the triggers as well.
pub fn wire_scroll(w: ScrollWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let animator = w.animator.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        animator.borrow_mut().observe_scroll();
    });
    dom::add_listener(&window, "scroll", move |_ev: web::Event| {
        let y = dom::scroll_y();
        w.state.borrow_mut().set_scroll(y);
        if let Some(hero_left) = &w.hero_left {
            dom::set_transform(hero_left, &format!("translateY({}px)", hero_parallax_px(y)));
        }
        w.animator.borrow_mut().observe_scroll();
    });
}

/// Keep the hero canvas backing store matched to its container.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, container: &web::Element) {
    dom::sync_canvas_to_container(canvas, container);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let container = container.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_to_container(&canvas, &container);
    });
}
