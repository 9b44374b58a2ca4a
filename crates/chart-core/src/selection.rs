// File: crates/chart-core/src/selection.rs
// Summary: Selection window (pan/zoom range in [0,1]) and the trimmer drag state machine.

use tracing::trace;

use crate::config::TrimmerConfig;
use crate::geometry::{clamp, snap};

/// Visible horizontal sub-range of the timeline. Contract: `0 <= lower < upper <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionWindow {
    pub lower: f64,
    pub upper: f64,
}

impl Default for SelectionWindow {
    fn default() -> Self { Self::FULL }
}

impl SelectionWindow {
    pub const FULL: SelectionWindow = SelectionWindow { lower: 0.0, upper: 1.0 };

    /// Intersect with [0,1]; an empty or non-finite result falls back to the full range.
    pub fn new(lower: f64, upper: f64) -> Self {
        let lower = clamp(lower, 0.0, 1.0);
        let upper = clamp(upper, 0.0, 1.0);
        if lower < upper { Self { lower, upper } } else { Self::FULL }
    }

    /// Window of `width` ending at the right edge, used for the initial zoom.
    pub fn trailing(width: f64) -> Self {
        Self::new(1.0 - width, 1.0)
    }

    pub fn width(&self) -> f64 { self.upper - self.lower }
}

/// Which part of the trimmer handle a drag grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    DraggingLeft,
    DraggingCenter,
    DraggingRight,
}

/// Touches this many pixels outside the handle still start a drag.
const TAP_EXPAND_PX: f64 = 20.0;

/// Trimmer under the overview chart. Positions come in as pixels along a track of `track_width`.
#[derive(Clone, Debug)]
pub struct Trimmer {
    config: TrimmerConfig,
    track_width: f64,
    window: SelectionWindow,
    state: DragState,
}

impl Trimmer {
    pub fn new(config: TrimmerConfig, track_width: f64) -> Self {
        let window = SelectionWindow::trailing(config.default_visibility);
        Self { config, track_width, window, state: DragState::Idle }
    }

    pub fn window(&self) -> SelectionWindow { self.window }
    pub fn state(&self) -> DragState { self.state }

    pub fn set_track_width(&mut self, width: f64) { self.track_width = width; }

    /// Programmatic zoom; width is clamped to the configured visibility bounds.
    pub fn set_window(&mut self, window: SelectionWindow) -> SelectionWindow {
        let width = clamp(window.width(), self.config.min_visibility, self.config.max_visibility);
        let lower = clamp(window.lower, 0.0, 1.0 - width);
        self.window = SelectionWindow::new(lower, lower + width);
        self.window
    }

    /// Handle position and width in pixels.
    pub fn handle_frame(&self) -> (f64, f64) {
        (self.window.lower * self.track_width, self.window.width() * self.track_width)
    }

    /// Classify a touch at `x_px`: edges grab the bounds, the middle pans.
    pub fn begin_drag(&mut self, x_px: f64) -> DragState {
        let (hx, hw) = self.handle_frame();
        self.state = if hw <= 0.0 || x_px < hx - TAP_EXPAND_PX || x_px > hx + hw + TAP_EXPAND_PX {
            DragState::Idle
        } else {
            let rel = (x_px - hx) / hw;
            if rel < self.config.edge_fraction {
                DragState::DraggingLeft
            } else if rel < 1.0 - self.config.edge_fraction {
                DragState::DraggingCenter
            } else {
                DragState::DraggingRight
            }
        };
        trace!(x_px, state = ?self.state, "trimmer drag began");
        self.state
    }

    /// Apply a horizontal drag delta. Returns the new window when it changed.
    pub fn drag_by(&mut self, dx_px: f64) -> Option<SelectionWindow> {
        if self.track_width <= 0.0 {
            return None;
        }
        let d = dx_px / self.track_width;
        let snap_at = self.config.snap_threshold / self.track_width;
        let (min_w, max_w) = (self.config.min_visibility, self.config.max_visibility);
        let SelectionWindow { lower, upper } = self.window;

        let (new_lower, new_upper) = match self.state {
            DragState::Idle => return None,
            DragState::DraggingLeft => {
                let mut l = clamp(lower + d, (upper - max_w).max(0.0), upper - min_w);
                if d < 0.0 {
                    l = snap(l, 0.0, snap_at);
                }
                (l, upper)
            }
            DragState::DraggingRight => {
                let right_limit = (lower + max_w).min(1.0);
                let mut u = clamp(upper + d, lower + min_w, right_limit);
                if d > 0.0 {
                    u = snap(u, right_limit, snap_at);
                }
                (lower, u)
            }
            DragState::DraggingCenter => {
                let width = upper - lower;
                let mut l = clamp(lower + d, 0.0, 1.0 - width);
                if d < 0.0 {
                    l = snap(l, 0.0, snap_at);
                } else if d > 0.0 {
                    l = snap(l, 1.0 - width, snap_at);
                }
                (l, l + width)
            }
        };

        let next = SelectionWindow::new(new_lower, new_upper);
        if next == self.window {
            return None;
        }
        self.window = next;
        Some(next)
    }

    pub fn end_drag(&mut self) { self.state = DragState::Idle; }

    pub fn cancel(&mut self) { self.state = DragState::Idle; }
}
