// File: crates/chart-core/tests/animation.rs
// Purpose: Transition sampling, mid-flight retargeting and keyframe tracks.

use chart_core::animation::KeyframeTransition;
use chart_core::config::AnimationConfig;
use chart_core::types::RETARGET_POINT_THRESHOLD;
use chart_core::{AffineTransform, AnimationHint, Animator, Interpolate, Keyframes, RetargetPolicy, Transition};

fn policy(duration: f64) -> RetargetPolicy {
    RetargetPolicy { duration, point_threshold: 300, low_end_device: false }
}

#[test]
fn transition_progress_is_clamped() {
    let t = Transition::new(0.0, 10.0, 1.0, 2.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.value_at(2.0), 5.0);
    assert_eq!(t.value_at(10.0), 10.0);
    assert!(t.is_finished(3.0));
    assert_eq!(Transition::new(1.0, 2.0, 0.0, 0.0).progress(0.0), 1.0);
}

#[test]
fn retarget_starts_from_displayed_value() {
    let mut a = Animator::new(0.0, policy(1.0));
    a.set_target(10.0, 0.0, AnimationHint::animated(10));
    assert_eq!(a.value(0.5), 5.0);

    a.set_target(20.0, 0.5, AnimationHint::animated(10));
    let t = a.transition().expect("running");
    assert_eq!(t.from, 5.0);
    assert_eq!(t.to, 20.0);
    // Remaining time of the interrupted transition.
    assert_eq!(t.duration, 0.5);
    assert_eq!(a.value(1.0), 20.0);
}

#[test]
fn large_series_keep_nominal_duration() {
    let mut a = Animator::new(0.0, policy(1.0));
    a.set_target(10.0, 0.0, AnimationHint::animated(500));
    a.set_target(20.0, 0.75, AnimationHint::animated(500));
    let t = a.transition().expect("running");
    assert_eq!(t.from, 7.5);
    assert_eq!(t.duration, 1.0);
}

#[test]
fn low_end_devices_keep_nominal_duration() {
    let config = AnimationConfig { low_end_device: true, ..AnimationConfig::default() };
    let p = RetargetPolicy::from_config(&config);
    assert!(p.keeps_nominal(1));
    assert!(!RetargetPolicy::default().keeps_nominal(299));
    assert!(RetargetPolicy::default().keeps_nominal(300));
}

#[test]
fn point_threshold_applies_on_every_device() {
    let config = AnimationConfig::default();
    assert_eq!(config.retarget_point_threshold, RETARGET_POINT_THRESHOLD);
    let desktop = RetargetPolicy::from_config(&config);
    assert!(desktop.keeps_nominal(RETARGET_POINT_THRESHOLD));
    assert!(!desktop.keeps_nominal(RETARGET_POINT_THRESHOLD - 1));
    let low_end = RetargetPolicy::from_config(&AnimationConfig { low_end_device: true, ..config });
    assert!(low_end.keeps_nominal(0));
}

#[test]
fn instant_updates_skip_animation() {
    let mut a = Animator::new(1.0, policy(1.0));
    a.set_target(3.0, 0.0, AnimationHint::animated(1));
    a.set_target(7.0, 0.2, AnimationHint::INSTANT);
    assert!(a.transition().is_none());
    assert_eq!(a.value(0.2), 7.0);
}

#[test]
fn finished_transition_is_settled() {
    let mut a = Animator::new(0.0, policy(0.3));
    a.set_target(1.0, 0.0, AnimationHint::animated(1));
    assert!(a.is_animating(0.1));
    a.settle(0.1);
    assert!(a.transition().is_some());
    a.settle(0.5);
    assert!(a.transition().is_none());
    assert_eq!(*a.target(), 1.0);
    // A fresh animation after settling runs the full duration from the last target.
    a.set_target(2.0, 1.0, AnimationHint::animated(1));
    assert_eq!(a.transition().map(|t| (t.from, t.duration)), Some((1.0, 0.3)));
}

#[test]
fn transforms_interpolate_componentwise() {
    let from = AffineTransform::IDENTITY;
    let to = AffineTransform::translation(10.0, -4.0);
    let mid = from.lerp(&to, 0.5);
    assert_eq!((mid.tx, mid.ty, mid.a, mid.d), (5.0, -2.0, 1.0, 1.0));
}

#[test]
fn keyframes_fade_in_through_midpoint() {
    let k = Keyframes::fade_in();
    assert_eq!(k.sample(0.0), 0.1);
    assert!((k.sample(0.25) - 0.25).abs() < 1e-9);
    assert_eq!(k.sample(0.5), 0.4);
    assert_eq!(k.sample(1.0), 1.0);
    assert_eq!(k.last(), 1.0);

    let out = KeyframeTransition::new(Keyframes::fade_to(0.8, 0.0), 2.0, 1.0);
    assert_eq!(out.value_at(2.0), 0.8);
    assert_eq!(out.value_at(2.5), 0.0);
    assert!(out.is_finished(3.0));
}
