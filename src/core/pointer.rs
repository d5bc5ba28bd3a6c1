use glam::Vec2;

use super::constants::{PLANE_TILT_FACTOR, POINTER_LERP_FACTOR, POINTER_START};

/// Client-space rectangle of the element a pointer event was measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Raw and smoothed pointer position over the hero region, in UV space
/// (origin bottom-left, both axes in \[0, 1\] while the pointer is inside).
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    pub target: Vec2,
    pub current: Vec2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        let start = Vec2::from_array(POINTER_START);
        Self {
            target: start,
            current: start,
        }
    }
}

impl PointerTracker {
    /// Record a pointer position given in client pixels. The y axis is flipped
    /// to match texture coordinates. Returns false (and keeps the old target)
    /// when the region has no area.
    pub fn set_target_from_client(&mut self, client_x: f32, client_y: f32, rect: Rect) -> bool {
        match client_to_uv(client_x, client_y, rect) {
            Some(uv) => {
                self.target = uv;
                true
            }
            None => false,
        }
    }

    /// One smoothing step: move `current` a fixed fraction toward `target`.
    #[inline]
    pub fn step(&mut self) {
        self.current = self.current.lerp(self.target, POINTER_LERP_FACTOR);
    }

    /// Plane rotation (x, y) in radians derived from the smoothed position.
    pub fn plane_rotation(&self) -> (f32, f32) {
        (
            (self.current.y - 0.5) * PLANE_TILT_FACTOR,
            (self.current.x - 0.5) * PLANE_TILT_FACTOR,
        )
    }
}

#[inline]
pub fn client_to_uv(client_x: f32, client_y: f32, rect: Rect) -> Option<Vec2> {
    if rect.is_degenerate() {
        return None;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = 1.0 - (client_y - rect.top) / rect.height;
    Some(Vec2::new(u, v))
}
