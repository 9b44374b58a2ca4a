// File: crates/chart-core/src/plot_calculator.rs
// Summary: Vertical autoscale for a horizontal window via precomputed per-chunk value bounds.

use tracing::{debug, trace};

use crate::axis::{nice_plot, preferred_origin, Plot, ValueRange};
use crate::chart::{Chart, VisibleSeries};
use crate::config::PlotConfig;
use crate::selection::SelectionWindow;
use crate::stack::StackSum;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotOptions {
    pub chunk_count: usize,
    pub target_steps: f64,
    /// Bars and percent charts always start at zero.
    pub zero_origin: bool,
    pub empty_space_threshold: f64,
}

impl PlotOptions {
    pub fn from_config(config: &PlotConfig, simplified: bool, zero_origin: bool) -> Self {
        Self {
            chunk_count: if simplified { config.simplified_chunk_count } else { config.chunk_count }.max(1),
            target_steps: config.target_steps,
            zero_origin,
            empty_space_threshold: config.empty_space_threshold,
        }
    }
}

impl Default for PlotOptions {
    fn default() -> Self { Self::from_config(&PlotConfig::default(), false, false) }
}

/// Chunked autoscaler. `update_*` scans the data once; `vertical_plot` is O(chunks) per query.
#[derive(Clone, Debug, Default)]
pub struct PlotCalculator {
    options: PlotOptions,
    /// Raw (unrounded, step 1) bounds per chunk so unions stay exact.
    chunks: Vec<Plot>,
}

impl PlotCalculator {
    pub fn new(options: PlotOptions) -> Self {
        Self { options, chunks: Vec::new() }
    }

    pub fn options(&self) -> &PlotOptions { &self.options }
    pub fn chunks(&self) -> &[Plot] { &self.chunks }

    /// Precompute chunk bounds over the visible series of a line chart.
    pub fn update_preloaded_plots(&mut self, chart: &Chart, visible: &VisibleSeries) {
        let series: Vec<_> = chart.visible_series(visible).collect();
        self.chunks = chunk_windows(self.options.chunk_count)
            .map(|(start, end)| {
                let range = series
                    .iter()
                    .map(|s| s.values_range_in(start, end))
                    .reduce(|a, b| a.union(&b))
                    .unwrap_or(ValueRange::new(0, 1));
                Plot::raw(range)
            })
            .collect();
        debug!(chunks = self.chunks.len(), series = series.len(), "preloaded plots from series");
    }

    /// Precompute chunk bounds over the stacked sums of a bar or percent chart.
    pub fn update_preloaded_plots_from_sum(&mut self, sum: &StackSum) {
        self.chunks = chunk_windows(self.options.chunk_count)
            .map(|(start, end)| Plot::raw(sum.values_range_in(start, end)))
            .collect();
        debug!(chunks = self.chunks.len(), points = sum.len(), "preloaded plots from stack sum");
    }

    /// Nice plot covering every chunk the window touches.
    pub fn vertical_plot(&self, window: SelectionWindow) -> Plot {
        let Some(range) = self.window_range(window) else {
            return Plot::UNIT;
        };
        if range.min == range.max {
            return Plot::DEFAULT;
        }
        let origin = if self.options.zero_origin {
            0
        } else {
            preferred_origin(range, self.options.empty_space_threshold)
        };
        let plot = nice_plot(range.max, origin, self.options.target_steps);
        trace!(lower = window.lower, upper = window.upper, ?plot, "vertical plot");
        plot
    }

    /// Union of the raw bounds of the chunks overlapping `window`.
    pub fn window_range(&self, window: SelectionWindow) -> Option<ValueRange> {
        let count = self.chunks.len();
        let lo = ((count as f64 * window.lower).floor().max(0.0) as usize).min(count);
        let hi = ((count as f64 * window.upper).ceil().max(0.0) as usize).min(count);
        self.chunks[lo..hi.max(lo)]
            .iter()
            .map(Plot::range)
            .reduce(|a, b| a.union(&b))
    }
}

fn chunk_windows(count: usize) -> impl Iterator<Item = (f64, f64)> {
    let delta = 1.0 / count as f64;
    (0..count).map(move |i| (i as f64 * delta, (i + 1) as f64 * delta))
}
