use glam::{Vec2, Vec3};

use super::constants::*;

// CPU mirror of the displacement in `shaders/plane.wgsl`. Keep the two in sync.

/// Travelling-wave term for a vertex at plane-space `(x, y)`.
#[inline]
pub fn wave(x: f32, y: f32, time: f32) -> f32 {
    (x * WAVE_FREQ_X + time * WAVE_SPEED_X).sin() + (y * WAVE_FREQ_Y - time * WAVE_SPEED_Y).cos()
}

/// Radial ripple around the pointer; `d` is the UV distance to the pointer.
#[inline]
pub fn ripple(d: f32, time: f32) -> f32 {
    (d * RIPPLE_FREQ - time * RIPPLE_SPEED).sin() * (-d * RIPPLE_FALLOFF).exp()
}

/// Total z offset applied to a plane vertex.
pub fn displacement(position: Vec3, uv: Vec2, mouse: Vec2, time: f32, depth: f32) -> f32 {
    let w = wave(position.x, position.y, time);
    let r = ripple(uv.distance(mouse), time);
    w * WAVE_WEIGHT + r * RIPPLE_WEIGHT + depth * DEPTH_WEIGHT
}

/// Fragment colour: vertical gradient, independent of every uniform.
#[inline]
pub fn gradient(v: f32) -> Vec3 {
    Vec3::from_array(GRADIENT_BOTTOM).lerp(Vec3::from_array(GRADIENT_TOP), v)
}
