// Host-side tests for easing, tweens and the one-shot reveal trigger.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn easing_endpoints_and_shape() {
    for ease in [Ease::Linear, Ease::Power3Out, Ease::Power4Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-1.0), 0.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert!((Ease::Power3Out.apply(0.5) - 0.875).abs() < 1e-6);
    assert!((Ease::Power4Out.apply(0.5) - 0.9375).abs() < 1e-6);
    // Out-curves front-load the motion
    assert!(Ease::Power4Out.apply(0.2) > Ease::Power3Out.apply(0.2));
    assert!(Ease::Power3Out.apply(0.2) > Ease::Linear.apply(0.2));
}

#[test]
fn tween_respects_delay_and_duration() {
    let tw = Tween::new(0.0_f32, 10.0, 2.0, Ease::Linear).delayed(0.5);
    assert_eq!(tw.sample(0.0), 0.0);
    assert_eq!(tw.sample(0.5), 0.0);
    assert!((tw.sample(1.5) - 5.0).abs() < 1e-5);
    assert_eq!(tw.sample(2.5), 10.0);
    assert_eq!(tw.sample(100.0), 10.0);
    assert!((tw.end_time() - 2.5).abs() < 1e-6);
}

#[test]
fn zero_duration_jumps_to_end() {
    let tw = Tween::new(1.0_f32, 3.0, 0.0, Ease::Power3Out);
    assert_eq!(tw.sample(0.001), 3.0);
}

#[test]
fn pose_tween_blends_all_channels() {
    let tw = Tween::new(Pose::hidden_below(50.0), Pose::REST, 1.0, Ease::Linear);
    let mid = tw.sample(0.5);
    assert!((mid.opacity - 0.5).abs() < 1e-6);
    assert!((mid.y - 25.0).abs() < 1e-6);
    assert_eq!(mid.scale, 1.0);
    assert_eq!(tw.sample(1.0), Pose::REST);
}

#[test]
fn pose_css() {
    let p = Pose {
        opacity: 0.25,
        y: 12.5,
        scale: 0.9,
    };
    assert_eq!(p.transform_css(), "translateY(12.5px) scale(0.9)");
    assert_eq!(p.opacity_css(), "0.25");
    assert_eq!(Pose::scaled(0.5).opacity, 1.0);
}

#[test]
fn stagger_is_linear_in_index() {
    assert_eq!(stagger(0, 0.12), 0.0);
    assert!((stagger(3, 0.12) - 0.36).abs() < 1e-6);
}

#[test]
fn reveal_fires_once_when_threshold_is_crossed() {
    let vh = 1000.0;
    let mut r = Reveal::on_scroll(0.75);
    assert_eq!(r.state, RevealState::Hidden);

    assert!(!r.observe(900.0, vh, 0.0));
    assert_eq!(r.state, RevealState::Hidden);
    assert_eq!(r.elapsed(0.0), None);

    assert!(r.observe(750.0, vh, 2.0));
    assert_eq!(r.state, RevealState::Revealing { since: 2.0 });

    // Never re-triggers, even after scrolling away and back
    assert!(!r.observe(2000.0, vh, 3.0));
    assert!(!r.observe(100.0, vh, 3.5));
    assert_eq!(r.elapsed(3.0), Some(1.0));
}

#[test]
fn reveal_settles_after_total_duration() {
    let mut r = Reveal::on_scroll(0.65);
    assert!(r.observe(0.0, 800.0, 1.0));
    assert!(!r.settle(1.5, 1.2));
    assert!(matches!(r.state, RevealState::Revealing { .. }));
    assert!(r.settle(2.5, 1.2));
    assert_eq!(r.state, RevealState::Revealed);
    assert_eq!(r.elapsed(5.0), None);
    assert!(!r.observe(0.0, 800.0, 6.0));
}

#[test]
fn immediate_reveal_is_already_playing() {
    let mut r = Reveal::immediate(0.5);
    assert_eq!(r.elapsed(1.5), Some(1.0));
    assert_eq!(r.elapsed(0.0), Some(0.0));
    assert!(!r.observe(-10.0, 800.0, 1.0));
}

#[test]
fn taller_viewport_fires_without_scrolling() {
    // Same element position, re-checked after the window grows
    let mut r = Reveal::on_scroll(0.75);
    assert!(!r.observe(700.0, 800.0, 0.0));
    assert!(r.observe(700.0, 1000.0, 0.5));
    assert_eq!(r.state, RevealState::Revealing { since: 0.5 });
}
