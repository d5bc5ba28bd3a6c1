// WGSL sources and the uniform blocks they read.
//
// The plane shader body refers to its tuning values by name; the declarations
// are generated from `constants.rs` so `waves.rs` and the GPU share one set.

use super::constants::*;

pub static PLANE_WGSL_BODY: &str = include_str!("../../shaders/plane.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");

/// Uniform block of `plane.wgsl`. 160 bytes, std140-compatible field order.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub time: f32,
    pub depth: f32,
    pub mouse: [f32; 2],
    // The plane is unlit; the scene light rides along for layout parity.
    pub light_dir: [f32; 3],
    pub light_intensity: f32,
}

/// Uniform block of `points.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub size: f32,
    pub opacity: f32,
    pub _pad: [f32; 2],
}

const PLANE_SCALARS: [(&str, f32); 10] = [
    ("WAVE_FREQ_X", WAVE_FREQ_X),
    ("WAVE_SPEED_X", WAVE_SPEED_X),
    ("WAVE_FREQ_Y", WAVE_FREQ_Y),
    ("WAVE_SPEED_Y", WAVE_SPEED_Y),
    ("WAVE_WEIGHT", WAVE_WEIGHT),
    ("RIPPLE_FREQ", RIPPLE_FREQ),
    ("RIPPLE_SPEED", RIPPLE_SPEED),
    ("RIPPLE_FALLOFF", RIPPLE_FALLOFF),
    ("RIPPLE_WEIGHT", RIPPLE_WEIGHT),
    ("DEPTH_WEIGHT", DEPTH_WEIGHT),
];

const PLANE_COLORS: [(&str, [f32; 3]); 2] = [
    ("GRADIENT_BOTTOM", GRADIENT_BOTTOM),
    ("GRADIENT_TOP", GRADIENT_TOP),
];

/// Full plane shader: generated `const` declarations followed by the body.
pub fn plane_shader_source() -> String {
    let mut src = String::with_capacity(PLANE_WGSL_BODY.len() + 1024);
    for (name, value) in PLANE_SCALARS {
        src.push_str(&format!("const {name}: f32 = {value:?};\n"));
    }
    for (name, [r, g, b]) in PLANE_COLORS {
        src.push_str(&format!(
            "const {name}: vec3<f32> = vec3<f32>({r:?}, {g:?}, {b:?});\n"
        ));
    }
    src.push('\n');
    src.push_str(PLANE_WGSL_BODY);
    src
}
