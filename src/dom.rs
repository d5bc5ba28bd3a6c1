use crate::core::{Pose, Rect, MAX_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(parent: &web::Element, selector: &str) -> Option<web::Element> {
    parent.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn html_children(el: &web::Element) -> Vec<web::HtmlElement> {
    let children = el.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|c| c.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, transform: &str) {
    _ = el.style().set_property("transform", transform);
}

pub fn apply_pose(el: &web::HtmlElement, pose: &Pose) {
    let style = el.style();
    _ = style.set_property("opacity", &pose.opacity_css());
    _ = style.set_property("transform", &pose.transform_css());
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Size the canvas backing store to its container at a capped pixel ratio.
pub fn sync_canvas_to_container(canvas: &web::HtmlCanvasElement, container: &web::Element) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let w_px = (container.client_width() as f64 * dpr) as u32;
        let h_px = (container.client_height() as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
