// Host-side tests for the plane displacement and mesh.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod waves {
    include!("../src/core/waves.rs");
}
mod plane {
    include!("../src/core/plane.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use plane::*;
use waves::*;

#[test]
fn ripple_at_pointer_is_pure_time_sine() {
    for &t in &[0.0_f32, 0.37, 1.0, 2.5, 10.0] {
        let r = ripple(0.0, t);
        assert!((r - (-4.5 * t).sin()).abs() < 1e-6, "t={t}: {r}");
    }
}

#[test]
fn ripple_decays_with_distance() {
    // Envelope bound: |ripple| <= exp(-4d)
    for i in 0..50 {
        let d = i as f32 * 0.05;
        assert!(ripple(d, 0.7).abs() <= (-RIPPLE_FALLOFF * d).exp() + 1e-6);
    }
    assert!(ripple(3.0, 0.7).abs() < 1e-5);
}

#[test]
fn wave_matches_closed_form() {
    let (x, y, t) = (0.4_f32, -1.2_f32, 3.0_f32);
    let expected = (x * 1.3 + t * 0.6).sin() + (y * 1.6 - t * 0.5).cos();
    assert!((wave(x, y, t) - expected).abs() < 1e-6);
    assert!(wave(x, y, t).abs() <= 2.0);
}

#[test]
fn displacement_sums_weighted_terms() {
    let pos = Vec3::new(1.0, 0.5, 0.0);
    let uv = Vec2::new(0.3, 0.6);
    let mouse = Vec2::new(0.5, 0.5);
    let (t, depth) = (1.7, 0.25);
    let expected = wave(pos.x, pos.y, t) * 0.8 + ripple(uv.distance(mouse), t) * 1.2 + depth * 1.2;
    assert!((displacement(pos, uv, mouse, t, depth) - expected).abs() < 1e-6);
}

#[test]
fn scroll_depth_shifts_every_vertex_equally() {
    let mouse = Vec2::new(0.5, 0.5);
    for &(x, y) in &[(-3.0_f32, 3.0_f32), (0.0, 0.0), (2.2, -1.1)] {
        let pos = Vec3::new(x, y, 0.0);
        let uv = Vec2::new((x + 3.0) / 6.0, (y + 3.0) / 6.0);
        let a = displacement(pos, uv, mouse, 0.9, 0.0);
        let b = displacement(pos, uv, mouse, 0.9, 0.5);
        assert!((b - a - 0.6).abs() < 1e-5);
    }
}

#[test]
fn gradient_ignores_everything_but_v() {
    let bottom = gradient(0.0);
    let top = gradient(1.0);
    assert!((bottom - Vec3::new(0.04, 0.04, 0.06)).length() < 1e-6);
    assert!((top - Vec3::new(0.15, 0.15, 0.22)).length() < 1e-6);
    let mid = gradient(0.5);
    assert!((mid - (bottom + top) * 0.5).length() < 1e-6);
}

#[test]
fn plane_mesh_has_expected_shape() {
    let mesh = build_plane(PLANE_SIZE, PLANE_SIZE, PLANE_SEGMENTS);
    let cols = (PLANE_SEGMENTS + 1) as usize;
    assert_eq!(mesh.vertices.len(), cols * cols);
    assert_eq!(mesh.indices.len(), (PLANE_SEGMENTS * PLANE_SEGMENTS * 6) as usize);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));

    let first = mesh.vertices[0];
    let last = mesh.vertices[mesh.vertices.len() - 1];
    assert_eq!(first.position, [-3.0, 3.0, 0.0]);
    assert_eq!(first.uv, [0.0, 1.0]);
    assert!((last.position[0] - 3.0).abs() < 1e-5);
    assert!((last.position[1] + 3.0).abs() < 1e-5);
    assert_eq!(last.uv, [1.0, 0.0]);
}

#[test]
fn plane_triangles_face_the_camera() {
    let mesh = build_plane(2.0, 2.0, 1);
    assert_eq!(mesh.vertices.len(), 4);
    for tri in mesh.indices.chunks(3) {
        let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0, "triangle {tri:?} faces away");
    }
}

#[test]
fn zero_segments_is_clamped_to_one() {
    let mesh = build_plane(1.0, 1.0, 0);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
}
