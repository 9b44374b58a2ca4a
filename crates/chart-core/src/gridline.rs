// File: crates/chart-core/src/gridline.rs
// Summary: Horizontal grid lines following Plot changes: enter/stay/leave diff with fades and slides.

use tracing::trace;

use crate::animation::{KeyframeTransition, Keyframes, Transition};
use crate::axis::Plot;
use crate::geometry::AffineTransform;
use crate::pool::Pool;
use crate::transform::transform_for_value_line;

/// Split of grid values between two plots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineDiff {
    pub entering: Vec<i64>,
    pub staying: Vec<i64>,
    pub leaving: Vec<i64>,
}

pub fn diff_lines(old: &[i64], new: &[i64]) -> LineDiff {
    LineDiff {
        entering: new.iter().copied().filter(|v| !old.contains(v)).collect(),
        staying: new.iter().copied().filter(|v| old.contains(v)).collect(),
        leaving: old.iter().copied().filter(|v| !new.contains(v)).collect(),
    }
}

/// Pixel height of one grid band.
pub fn label_height(plot: &Plot, height: f64) -> f64 {
    (height / plot.span().max(1) as f64 * plot.step as f64).ceil()
}

#[derive(Clone, Debug)]
struct GridLine {
    value: i64,
    opacity: KeyframeTransition,
    transform: Transition<AffineTransform>,
    leaving: bool,
}

impl GridLine {
    fn blank() -> Self {
        Self {
            value: 0,
            opacity: KeyframeTransition::new(Keyframes::hold(0.0), 0.0, 0.0),
            transform: Transition::new(AffineTransform::IDENTITY, AffineTransform::IDENTITY, 0.0, 0.0),
            leaving: false,
        }
    }
}

/// One grid line as it should be drawn at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineFrame {
    pub value: i64,
    /// Upward offset from the bottom edge, in pixels (negative y).
    pub offset_y: f64,
    pub opacity: f64,
    pub label_height: f64,
}

/// Grid lines of one vertical axis.
#[derive(Debug)]
pub struct GridLines {
    duration: f64,
    plot: Option<Plot>,
    height: f64,
    lines: Vec<GridLine>,
    pool: Pool<(), GridLine>,
}

impl GridLines {
    pub fn new(duration: f64) -> Self {
        Self { duration, plot: None, height: 0.0, lines: Vec::new(), pool: Pool::new() }
    }

    pub fn plot(&self) -> Option<Plot> { self.plot }

    /// Move to `plot`. New values slide in from where they sat under the previous plot; values
    /// no longer present fade out while sliding to their new position.
    pub fn update(&mut self, plot: Plot, height: f64, now: f64, animated: bool) {
        if self.plot == Some(plot) && self.height == height {
            return;
        }
        let animated = animated && self.plot.is_some() && self.duration > 0.0;
        if !animated {
            for line in self.lines.drain(..) {
                self.pool.release((), line);
            }
        }
        self.drop_hidden(now);

        let old_plot = self.plot.unwrap_or(plot);
        let duration = if animated { self.duration } else { 0.0 };
        let old_values: Vec<i64> = self.lines.iter().map(|l| l.value).collect();
        let diff = diff_lines(&old_values, &plot.line_values());

        for line in &mut self.lines {
            let current_opacity = line.opacity.value_at(now);
            let current_transform = line.transform.value_at(now);
            line.leaving = !diff.staying.contains(&line.value);
            let target = if line.leaving { 0.0 } else { 1.0 };
            line.opacity = KeyframeTransition::new(Keyframes::fade_to(current_opacity, target), now, duration);
            line.transform = Transition::new(
                current_transform,
                transform_for_value_line(line.value, &plot, height),
                now,
                duration,
            );
        }
        for &value in &diff.entering {
            let mut line = self.pool.acquire(&(), GridLine::blank);
            line.value = value;
            line.leaving = false;
            let keyframes = if animated { Keyframes::fade_in() } else { Keyframes::hold(1.0) };
            line.opacity = KeyframeTransition::new(keyframes, now, duration);
            line.transform = Transition::new(
                transform_for_value_line(value, &old_plot, height),
                transform_for_value_line(value, &plot, height),
                now,
                duration,
            );
            self.lines.push(line);
        }
        trace!(
            entering = diff.entering.len(),
            leaving = diff.leaving.len(),
            pooled = self.pool.available(&()),
            "grid lines updated"
        );
        self.plot = Some(plot);
        self.height = height;
    }

    /// Release lines that finished fading out.
    fn drop_hidden(&mut self, now: f64) {
        let (hidden, kept): (Vec<_>, Vec<_>) =
            self.lines.drain(..).partition(|l| l.leaving && l.opacity.is_finished(now));
        self.lines = kept;
        for line in hidden {
            self.pool.release((), line);
        }
    }

    pub fn frame(&self, now: f64) -> Vec<GridLineFrame> {
        let band = self.plot.map(|p| label_height(&p, self.height)).unwrap_or(0.0);
        let mut out: Vec<GridLineFrame> = self
            .lines
            .iter()
            .map(|l| GridLineFrame {
                value: l.value,
                offset_y: l.transform.value_at(now).ty,
                opacity: l.opacity.value_at(now),
                label_height: band,
            })
            .collect();
        out.sort_by_key(|f| f.value);
        out
    }

    /// Lines still visible or animating, including leaving ones.
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}
