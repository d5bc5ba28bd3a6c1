/// Hero scene, pointer and animation tuning constants.
///
/// Shared by the web frontend and the host-side tests, so nothing in here may
/// touch browser APIs.
// Frame clock: fixed increment per animation frame (not wall time)
pub const TIME_STEP_PER_FRAME: f64 = 0.01;

// Pointer smoothing
pub const POINTER_LERP_FACTOR: f32 = 0.08;
pub const POINTER_START: [f32; 2] = [0.5, 0.5];
pub const PLANE_TILT_FACTOR: f32 = 0.3; // radians per unit offset from the hero centre

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.6, 2.8];
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Directional light
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 2.0];
pub const LIGHT_INTENSITY: f32 = 1.3;

// Plane geometry
pub const PLANE_SIZE: f32 = 6.0;
pub const PLANE_SEGMENTS: u32 = 160;

// Vertex displacement
pub const WAVE_FREQ_X: f32 = 1.3;
pub const WAVE_SPEED_X: f32 = 0.6;
pub const WAVE_FREQ_Y: f32 = 1.6;
pub const WAVE_SPEED_Y: f32 = 0.5;
pub const WAVE_WEIGHT: f32 = 0.8;
pub const RIPPLE_FREQ: f32 = 14.0;
pub const RIPPLE_SPEED: f32 = 4.5;
pub const RIPPLE_FALLOFF: f32 = 4.0;
pub const RIPPLE_WEIGHT: f32 = 1.2;
pub const DEPTH_WEIGHT: f32 = 1.2;

// Fragment gradient (bottom -> top)
pub const GRADIENT_BOTTOM: [f32; 3] = [0.04, 0.04, 0.06];
pub const GRADIENT_TOP: [f32; 3] = [0.15, 0.15, 0.22];

// Scroll
pub const SCROLL_DEPTH_FACTOR: f32 = 0.0005;
pub const HERO_PARALLAX_FACTOR: f32 = 0.08; // px of hero-left shift per px scrolled

// Plane entrance
pub const PLANE_ENTRANCE_FROM_Z: f32 = -2.0;
pub const PLANE_ENTRANCE_SEC: f32 = 1.6;

// Particle avatar
pub const AVATAR_SAMPLE_STRIDE: usize = 2;
pub const AVATAR_ALPHA_THRESHOLD: u8 = 128;
pub const AVATAR_PIXEL_DIVISOR: f32 = 100.0;
pub const AVATAR_Z_JITTER: f32 = 0.5; // total span, centred on 0
pub const AVATAR_DRIFT_AMPLITUDE: f32 = 0.0005;
pub const AVATAR_POINT_SIZE: f32 = 0.02;
pub const AVATAR_OPACITY: f32 = 0.8;
pub const AVATAR_OFFSET: [f32; 3] = [0.0, 0.0, 0.1];
pub const AVATAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Typed quote
pub const TYPING_INTERVAL_MS: i32 = 55;

// Card tilt
pub const CARD_TILT_DEG: f32 = 15.0;
pub const CARD_FLIP_DEG: f32 = 180.0;

// Reveal thresholds (fraction of viewport height from the top)
pub const PROJECT_REVEAL_THRESHOLD: f32 = 0.75;
pub const ABOUT_REVEAL_THRESHOLD: f32 = 0.65;

// Hero entrance
pub const HERO_ENTRANCE_OFFSET_PX: f32 = 50.0;
pub const HERO_ENTRANCE_SEC: f32 = 1.2;
pub const HERO_ENTRANCE_STAGGER_SEC: f32 = 0.12;

// Project reveal
pub const PROJECT_OFFSET_PX: f32 = 60.0;
pub const PROJECT_REVEAL_SEC: f32 = 1.0;
pub const PROJECT_MEDIA_FROM_SCALE: f32 = 0.92;
pub const PROJECT_MEDIA_SEC: f32 = 1.2;
pub const PROJECT_INFO_OFFSET_PX: f32 = 30.0;
pub const PROJECT_INFO_SEC: f32 = 1.0;
pub const PROJECT_INFO_STAGGER_SEC: f32 = 0.15;

// About portrait
pub const PORTRAIT_OFFSET_PX: f32 = 40.0;
pub const PORTRAIT_REVEAL_SEC: f32 = 1.2;
