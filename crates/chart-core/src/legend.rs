// File: crates/chart-core/src/legend.rs
// Summary: Date-label decimation under a power-of-two stride anchored at the newest label.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::animation::{AnimationHint, Animator, RetargetPolicy};
use crate::config::LegendConfig;
use crate::selection::SelectionWindow;
use crate::transform::container_offset;

/// One selected label and its x position in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLabel {
    pub index: usize,
    pub x: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decimation {
    pub stride: usize,
    /// Newest first.
    pub labels: Vec<LegendLabel>,
}

/// Minimum spacing between labels for a viewport of `visible_width` pixels.
pub fn min_label_spacing(visible_width: f64, config: &LegendConfig) -> f64 {
    (visible_width - 2.0 * config.horizontal_inset) / config.max_space_delimiter
}

/// Width of the scrollable content for `window` over `visible_width` pixels, rounded up the same
/// way the scroll container is sized so labels line up with the plotted points.
pub fn content_width(window: SelectionWindow, visible_width: f64) -> f64 {
    container_offset(window, visible_width).0
}

/// `max(1, 2^round(log2(required)))` where `required = label_count / labels_that_fit`.
pub fn stride_for(label_count: usize, labels_that_fit: f64) -> usize {
    if label_count == 0 || !(labels_that_fit > 0.0) {
        return 1;
    }
    let required = label_count as f64 / labels_that_fit;
    if !(required > 1.0) {
        return 1;
    }
    let exponent = required.log2().round().clamp(0.0, (usize::BITS - 2) as f64);
    1usize << exponent as u32
}

/// Pick labels `N-1, N-1-stride, …` and place them across the zoomed content.
///
/// Because the stride is a power of two anchored at the last index, the labels kept at stride
/// `2k` are a subset of those kept at stride `k`.
pub fn decimate(label_count: usize, window: SelectionWindow, visible_width: f64, min_spacing: f64) -> Decimation {
    decimate_inset(label_count, window, visible_width, min_spacing, 0.0)
}

/// Same as [`decimate`] with spacing and insets from `config`.
pub fn decimate_with(
    label_count: usize,
    window: SelectionWindow,
    visible_width: f64,
    config: &LegendConfig,
) -> Decimation {
    let min_spacing = min_label_spacing(visible_width, config);
    decimate_inset(label_count, window, visible_width, min_spacing, config.horizontal_inset)
}

/// Labels are laid out over the content minus an `inset` on both sides; the fit is counted over
/// that same width.
fn decimate_inset(
    label_count: usize,
    window: SelectionWindow,
    visible_width: f64,
    min_spacing: f64,
    inset: f64,
) -> Decimation {
    if label_count == 0 {
        return Decimation { stride: 1, labels: Vec::new() };
    }
    let content = content_width(window, visible_width);
    let usable = content - 2.0 * inset;
    let fit = if !(usable > 0.0) {
        1.0
    } else if min_spacing > 0.0 {
        usable / min_spacing
    } else {
        label_count as f64
    };
    let stride = stride_for(label_count, fit);
    let labels = (0..label_count)
        .rev()
        .step_by(stride)
        .map(|index| LegendLabel { index, x: label_x(index, label_count, content, inset) })
        .collect();
    Decimation { stride, labels }
}

fn label_x(index: usize, count: usize, content: f64, inset: f64) -> f64 {
    if count < 2 {
        return inset;
    }
    let spacing = (content - 2.0 * inset) / (count - 1) as f64;
    index as f64 * spacing + inset
}

#[derive(Clone, Debug)]
struct TrackedLabel {
    x: f64,
    opacity: Animator<f64>,
    leaving: bool,
}

/// Label with its current opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleLabel {
    pub index: usize,
    pub x: f64,
    pub opacity: f64,
}

/// Cross-fades labels between successive decimations. Entering labels fade in from 0, leaving
/// labels fade out and are dropped once invisible; labels in both sets are not touched.
#[derive(Clone, Debug)]
pub struct LegendLabels {
    policy: RetargetPolicy,
    labels: BTreeMap<usize, TrackedLabel>,
    stride: usize,
}

impl LegendLabels {
    pub fn new(policy: RetargetPolicy) -> Self {
        Self { policy, labels: BTreeMap::new(), stride: 0 }
    }

    pub fn stride(&self) -> usize { self.stride }

    pub fn update(&mut self, decimation: &Decimation, now: f64, animated: bool) {
        let hint = if animated { AnimationHint::animated(0) } else { AnimationHint::INSTANT };
        let mut entering = 0usize;
        for label in &decimation.labels {
            match self.labels.get_mut(&label.index) {
                Some(tracked) => {
                    tracked.x = label.x;
                    if tracked.leaving {
                        tracked.leaving = false;
                        tracked.opacity.set_target(1.0, now, hint);
                    }
                }
                None => {
                    entering += 1;
                    let mut opacity = Animator::new(0.0, self.policy);
                    opacity.set_target(1.0, now, hint);
                    self.labels.insert(label.index, TrackedLabel { x: label.x, opacity, leaving: false });
                }
            }
        }
        let kept: BTreeSet<usize> = decimation.labels.iter().map(|l| l.index).collect();
        for (index, tracked) in self.labels.iter_mut() {
            if !kept.contains(index) && !tracked.leaving {
                tracked.leaving = true;
                tracked.opacity.set_target(0.0, now, hint);
            }
        }
        if decimation.stride != self.stride {
            trace!(from = self.stride, to = decimation.stride, entering, "legend stride changed");
        }
        self.stride = decimation.stride;
        self.prune(now);
    }

    /// Forget leaving labels that have fully faded.
    pub fn prune(&mut self, now: f64) {
        self.labels.retain(|_, l| !(l.leaving && !l.opacity.is_animating(now)));
    }

    /// Every label still on screen, oldest index first.
    pub fn visible(&self, now: f64) -> Vec<VisibleLabel> {
        self.labels
            .iter()
            .map(|(&index, l)| VisibleLabel { index, x: l.x, opacity: l.opacity.value(now) })
            .collect()
    }
}
