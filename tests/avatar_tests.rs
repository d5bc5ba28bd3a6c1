// Host-side tests for particle avatar sampling and drift.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod avatar {
    include!("../src/core/avatar.rs");
}

use avatar::*;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn image(width: u32, height: u32, alpha: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            buf.extend_from_slice(&[10, 20, 30, alpha(x, y)]);
        }
    }
    buf
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn fully_opaque_image_emits_ceil_half_grid() {
    for &(w, h) in &[(4u32, 4u32), (5, 3), (1, 1), (7, 10)] {
        let px = image(w, h, |_, _| 255);
        let cloud = sample_particles(&px, w, h, &mut rng()).unwrap();
        let expected = (w as usize).div_ceil(2) * (h as usize).div_ceil(2);
        assert_eq!(cloud.len(), expected, "{w}x{h}");
        assert_eq!(cloud.colors.len(), expected);
    }
}

#[test]
fn only_stride_grid_inside_opaque_region_is_sampled() {
    // Opaque square at x,y in [2, 6)
    let (w, h) = (10, 10);
    let px = image(w, h, |x, y| if (2..6).contains(&x) && (2..6).contains(&y) { 255 } else { 0 });
    let cloud = sample_particles(&px, w, h, &mut rng()).unwrap();
    assert_eq!(cloud.len(), 4); // x,y in {2, 4}
    for p in &cloud.positions {
        let x = p.x * AVATAR_PIXEL_DIVISOR + w as f32 / 2.0;
        let y = -p.y * AVATAR_PIXEL_DIVISOR + h as f32 / 2.0;
        assert!([2.0, 4.0].iter().any(|v| (x - v).abs() < 1e-4), "x={x}");
        assert!([2.0, 4.0].iter().any(|v| (y - v).abs() < 1e-4), "y={y}");
    }
}

#[test]
fn alpha_threshold_is_exclusive() {
    let px = image(2, 2, |_, _| AVATAR_ALPHA_THRESHOLD);
    assert!(sample_particles(&px, 2, 2, &mut rng()).unwrap().is_empty());
    let px = image(2, 2, |_, _| AVATAR_ALPHA_THRESHOLD + 1);
    assert_eq!(sample_particles(&px, 2, 2, &mut rng()).unwrap().len(), 1);
}

#[test]
fn positions_are_centred_scaled_and_jittered() {
    let (w, h) = (200, 100);
    let px = image(w, h, |_, _| 255);
    let cloud = sample_particles(&px, w, h, &mut rng()).unwrap();
    let first = cloud.positions[0];
    assert!((first.x - (-1.0)).abs() < 1e-6);
    assert!((first.y - 0.5).abs() < 1e-6);
    assert!(cloud.positions.iter().all(|p| p.z.abs() <= 0.25));
    assert!(cloud.colors.iter().all(|c| *c == [1.0, 1.0, 1.0]));
    // Jitter is not constant
    assert!(cloud.positions.iter().any(|p| (p.z - first.z).abs() > 1e-3));
}

#[test]
fn rejects_empty_and_mismatched_buffers() {
    assert_eq!(
        sample_particles(&[], 0, 4, &mut rng()).unwrap_err(),
        AvatarError::Empty { width: 0, height: 4 }
    );
    let err = sample_particles(&[0u8; 12], 2, 2, &mut rng()).unwrap_err();
    assert_eq!(
        err,
        AvatarError::BufferSize {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12
        }
    );
    assert!(err.to_string().contains("expected 16"));
}

#[test]
fn drift_moves_only_depth_keyed_by_flat_index() {
    let px = image(4, 2, |_, _| 255);
    let mut cloud = sample_particles(&px, 4, 2, &mut rng()).unwrap();
    let before = cloud.positions.clone();
    let t = 1.25;
    cloud.drift(t);
    for (k, (a, b)) in before.iter().zip(cloud.positions.iter()).enumerate() {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        let i = (k * 3 + 2) as f64;
        let expected = a.z + (t + i).sin() as f32 * AVATAR_DRIFT_AMPLITUDE;
        assert!((b.z - expected).abs() < 1e-7);
    }
}
