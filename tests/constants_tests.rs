// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_clock_are_sane() {
    assert!(POINTER_LERP_FACTOR > 0.0 && POINTER_LERP_FACTOR < 1.0);
    assert!(TIME_STEP_PER_FRAME > 0.0);
    assert!(POINTER_START.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_valid() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // The camera must sit in front of the plane
    assert!(CAMERA_EYE[2] > 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn avatar_parameters_are_consistent() {
    assert!(AVATAR_SAMPLE_STRIDE >= 1);
    assert!(AVATAR_PIXEL_DIVISOR > 0.0);
    assert!(AVATAR_OPACITY > 0.0 && AVATAR_OPACITY <= 1.0);
    // Drift per frame is tiny next to the initial jitter
    assert!(AVATAR_DRIFT_AMPLITUDE < AVATAR_Z_JITTER / 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_timings_are_positive_and_ordered() {
    assert!(PROJECT_REVEAL_THRESHOLD > 0.0 && PROJECT_REVEAL_THRESHOLD <= 1.0);
    assert!(ABOUT_REVEAL_THRESHOLD > 0.0 && ABOUT_REVEAL_THRESHOLD <= 1.0);
    assert!(HERO_ENTRANCE_SEC > HERO_ENTRANCE_STAGGER_SEC);
    assert!(PROJECT_INFO_SEC > PROJECT_INFO_STAGGER_SEC);
    assert!(PROJECT_MEDIA_FROM_SCALE < 1.0);
    assert!(PLANE_ENTRANCE_FROM_Z < 0.0 && PLANE_ENTRANCE_SEC > 0.0);
    assert!(TYPING_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gradient_brightens_upward() {
    for i in 0..3 {
        assert!(GRADIENT_TOP[i] > GRADIENT_BOTTOM[i]);
    }
    assert!(CARD_FLIP_DEG > CARD_TILT_DEG);
}
