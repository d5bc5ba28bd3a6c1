// Per-frame scene state shared between the frame loop and event handlers.
//
// Nothing here references platform APIs; the web frontend owns one
// `FrameState` and threads it through each frame explicitly.

use glam::{EulerRot, Mat4, Vec3};

use super::constants::*;
use super::pointer::PointerTracker;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Directional light carried with the scene uniforms.
#[derive(Clone, Copy, Debug)]
pub struct SceneLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl Default for SceneLight {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(LIGHT_POSITION),
            intensity: LIGHT_INTENSITY,
        }
    }
}

impl SceneLight {
    /// Unit vector pointing from the scene toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Mutable per-frame inputs: the frame clock, pointer and scroll depth.
///
/// The clock accumulates in f64; an f32 sum stops advancing once the step
/// falls below half an ulp (around 2^18).
#[derive(Clone, Debug, Default)]
pub struct FrameState {
    pub time: f64,
    pub pointer: PointerTracker,
    pub scroll_depth: f32,
}

impl FrameState {
    /// Advance one animation frame: tick the clock and smooth the pointer.
    pub fn advance(&mut self) {
        self.time += TIME_STEP_PER_FRAME;
        self.pointer.step();
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_depth = scroll_y * SCROLL_DEPTH_FACTOR;
    }

    /// Model matrix for the hero plane at entrance offset `z`.
    pub fn plane_model(&self, z: f32) -> Mat4 {
        let (rx, ry) = self.pointer.plane_rotation();
        Mat4::from_translation(Vec3::new(0.0, 0.0, z))
            * Mat4::from_euler(EulerRot::XYZ, rx, ry, 0.0)
    }
}

/// Vertical parallax shift for the hero copy, in CSS px.
#[inline]
pub fn hero_parallax_px(scroll_y: f32) -> f32 {
    scroll_y * HERO_PARALLAX_FACTOR
}
