// File: crates/chart-core/src/animation.rs
// Summary: Linear interpolation of displayed values with continuous retargeting.
// Notes:
// - Time is caller-supplied seconds (`now`), so the engine never reads a clock.
// - Retargeting always starts from what is currently on screen; nothing jumps.

use tracing::trace;

use crate::config::AnimationConfig;
use crate::geometry::{clamp, AffineTransform, Point};
use crate::path::Path;

/// Values that can be blended linearly. `t = 0` is `self`, `t = 1` is `to`.
pub trait Interpolate: Clone {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self { self + (to - self) * t }
}

impl Interpolate for f32 {
    fn lerp(&self, to: &Self, t: f64) -> Self { self + (to - self) * t as f32 }
}

impl Interpolate for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Point::new(self.x.lerp(&to.x, t), self.y.lerp(&to.y, t))
    }
}

impl Interpolate for AffineTransform {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        AffineTransform {
            a: self.a.lerp(&to.a, t),
            b: self.b.lerp(&to.b, t),
            c: self.c.lerp(&to.c, t),
            d: self.d.lerp(&to.d, t),
            tx: self.tx.lerp(&to.tx, t),
            ty: self.ty.lerp(&to.ty, t),
        }
    }
}

/// Point-wise blend. Paths with different point counts cannot be morphed; the target wins.
impl Interpolate for Path {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        if self.points.len() != to.points.len() {
            return to.clone();
        }
        let points = self.points.iter().zip(&to.points).map(|(p, q)| p.lerp(q, t)).collect();
        Path { points, values: to.values.clone(), range: to.range }
    }
}

/// One in-flight transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
    pub start: f64,
    pub duration: f64,
}

impl<T: Interpolate> Transition<T> {
    pub fn new(from: T, to: T, start: f64, duration: f64) -> Self {
        Self { from, to, start, duration }
    }

    /// `clamp((now - start) / duration, 0, 1)`; zero-length transitions are always complete.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        clamp((now - self.start) / self.duration, 0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> T {
        self.from.lerp(&self.to, self.progress(now))
    }

    pub fn remaining(&self, now: f64) -> f64 {
        self.duration - (now - self.start)
    }

    pub fn is_finished(&self, now: f64) -> bool { self.progress(now) >= 1.0 }
}

/// How a retarget picks the duration of the follow-up transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetargetPolicy {
    pub duration: f64,
    pub point_threshold: usize,
    pub low_end_device: bool,
}

impl Default for RetargetPolicy {
    fn default() -> Self { Self::from_config(&AnimationConfig::default()) }
}

impl RetargetPolicy {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            duration: config.duration,
            point_threshold: config.retarget_point_threshold,
            low_end_device: config.low_end_device,
        }
    }

    /// Large series and slow hosts restart with the full nominal duration.
    pub fn keeps_nominal(&self, point_count: usize) -> bool {
        self.low_end_device || point_count >= self.point_threshold
    }
}

/// Per-call animation hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationHint {
    pub animated: bool,
    /// Size of the animated series; feeds [`RetargetPolicy::keeps_nominal`].
    pub point_count: usize,
}

impl AnimationHint {
    pub const INSTANT: AnimationHint = AnimationHint { animated: false, point_count: 0 };

    pub const fn animated(point_count: usize) -> Self {
        Self { animated: true, point_count }
    }
}

/// Holds the latest target and, while animating, the transition towards it.
#[derive(Clone, Debug)]
pub struct Animator<T> {
    target: T,
    transition: Option<Transition<T>>,
    policy: RetargetPolicy,
}

impl<T: Interpolate> Animator<T> {
    pub fn new(value: T, policy: RetargetPolicy) -> Self {
        Self { target: value, transition: None, policy }
    }

    pub fn target(&self) -> &T { &self.target }
    pub fn transition(&self) -> Option<&Transition<T>> { self.transition.as_ref() }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_finished(now))
    }

    /// Value to display at `now`.
    pub fn value(&self, now: f64) -> T {
        match &self.transition {
            Some(t) => t.value_at(now),
            None => self.target.clone(),
        }
    }

    /// Start a transition to `to`, or retarget the running one.
    ///
    /// A retarget begins at the value displayed at `now` and, unless the policy keeps the nominal
    /// duration, lasts only for the time the old transition had left. With no time left the
    /// target is applied at once.
    pub fn set_target(&mut self, to: T, now: f64, hint: AnimationHint) {
        if !hint.animated || self.policy.duration <= 0.0 {
            self.target = to;
            self.transition = None;
            return;
        }
        let (from, duration) = match self.transition.take() {
            Some(running) if !running.is_finished(now) => {
                let remaining = running.remaining(now);
                let duration =
                    if self.policy.keeps_nominal(hint.point_count) { self.policy.duration } else { remaining };
                (running.value_at(now), duration)
            }
            _ => (self.target.clone(), self.policy.duration),
        };
        trace!(now, duration, points = hint.point_count, "animation retargeted");
        self.target = to.clone();
        if duration > 0.0 {
            self.transition = Some(Transition::new(from, to, now, duration));
        }
    }

    /// Drop a finished transition so later reads skip interpolation.
    pub fn settle(&mut self, now: f64) {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }
}

/// Piecewise-linear keyframe track over normalized progress `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    values: Vec<f64>,
    key_times: Vec<f64>,
}

impl Keyframes {
    /// `values` and `key_times` are paired; extra entries on either side are ignored.
    pub fn new(values: Vec<f64>, key_times: Vec<f64>) -> Self {
        let n = values.len().min(key_times.len());
        Self { values: values[..n].to_vec(), key_times: key_times[..n].to_vec() }
    }

    /// Grid lines and legend labels fading in.
    pub fn fade_in() -> Self {
        Self::new(vec![0.1, 0.4, 1.0], vec![0.0, 0.5, 1.0])
    }

    /// From the current opacity straight towards `to`; reaches it by the midpoint.
    pub fn fade_to(from: f64, to: f64) -> Self {
        Self::new(vec![from, to, to], vec![0.0, 0.5, 1.0])
    }

    /// Constant track; used for changes applied without animation.
    pub fn hold(value: f64) -> Self {
        Self::new(vec![value], vec![0.0])
    }

    pub fn sample(&self, progress: f64) -> f64 {
        let t = clamp(progress, 0.0, 1.0);
        let Some(&first) = self.values.first() else {
            return 0.0;
        };
        if t <= self.key_times[0] {
            return first;
        }
        for i in 1..self.values.len() {
            let (t0, t1) = (self.key_times[i - 1], self.key_times[i]);
            if t <= t1 {
                let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 1.0 };
                return self.values[i - 1].lerp(&self.values[i], local);
            }
        }
        self.values[self.values.len() - 1]
    }

    pub fn last(&self) -> f64 { self.values.last().copied().unwrap_or(0.0) }
}

/// Keyframe track bound to a start time and duration.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTransition {
    pub keyframes: Keyframes,
    pub start: f64,
    pub duration: f64,
}

impl KeyframeTransition {
    pub fn new(keyframes: Keyframes, start: f64, duration: f64) -> Self {
        Self { keyframes, start, duration }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        clamp((now - self.start) / self.duration, 0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> f64 { self.keyframes.sample(self.progress(now)) }

    pub fn is_finished(&self, now: f64) -> bool { self.progress(now) >= 1.0 }
}
