use crate::core::Rect;
use crate::dom;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position relative to `el`'s top-left corner, with the element rect.
#[inline]
pub fn pointer_local(ev: &web::MouseEvent, el: &web::Element) -> (f32, f32, Rect) {
    let rect = dom::client_rect(el);
    let (cx, cy) = client_pos(ev);
    (cx - rect.left, cy - rect.top, rect)
}
