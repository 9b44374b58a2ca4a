// File: crates/chart-core/src/kind.rs
// Summary: Chart kinds and the per-family strategies (paths, plots, placement) selected once per chart.

use std::fmt;

use crate::axis::Plot;
use crate::chart::{Chart, VisibleSeries};
use crate::geometry::AffineTransform;
use crate::path::Path;
use crate::plot_calculator::PlotCalculator;
use crate::stack::StackSum;
use crate::transform::{
    bar_path_for_series, path_for_series, percent_path_for_series, stack_paths, transform_for_percent_plot,
    transform_for_plot,
};

/// Percent charts use a fixed axis.
pub const PERCENT_PLOT: Plot = Plot::new(0, 100, 25);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Lines,
    TwoLines,
    Bars,
    SingleBar,
    Percent,
    Pie,
}

impl ChartKind {
    /// Derive the kind from the chart's layout flags and series styles.
    pub fn from_chart(chart: &Chart) -> Self {
        use crate::series::SeriesStyle;
        if chart.is_percentage {
            ChartKind::Percent
        } else if chart.is_dual_axis {
            ChartKind::TwoLines
        } else if chart.is_stacked {
            ChartKind::Bars
        } else if chart.series.len() == 1 && chart.series[0].style == SeriesStyle::Bar {
            ChartKind::SingleBar
        } else {
            ChartKind::Lines
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lines" | "line" => Some(ChartKind::Lines),
            "two-lines" | "twolines" | "dual" => Some(ChartKind::TwoLines),
            "bars" | "stacked" => Some(ChartKind::Bars),
            "single-bar" | "singlebar" | "bar" => Some(ChartKind::SingleBar),
            "percent" | "percentage" => Some(ChartKind::Percent),
            "pie" => Some(ChartKind::Pie),
            _ => None,
        }
    }

    /// Kind shown when zooming into a single day.
    pub fn details_kind(self) -> Self {
        match self {
            ChartKind::SingleBar => ChartKind::Lines,
            ChartKind::Percent => ChartKind::Pie,
            other => other,
        }
    }

    pub fn supports_column_visibility(self) -> bool {
        !matches!(self, ChartKind::SingleBar | ChartKind::TwoLines)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Lines => "lines",
            ChartKind::TwoLines => "two-lines",
            ChartKind::Bars => "bars",
            ChartKind::SingleBar => "single-bar",
            ChartKind::Percent => "percent",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// Per-family behaviour. Implementations are stateless; the session owns all derived data.
pub trait ChartStrategy: Send + Sync {
    fn kind(&self) -> ChartKind;

    /// Bars and percent charts never float their baseline.
    fn zero_origin(&self) -> bool;

    fn supports_column_visibility(&self) -> bool { self.kind().supports_column_visibility() }

    /// Number of independent vertical axes.
    fn axis_count(&self) -> usize { 1 }

    /// Axis a series is measured against.
    fn axis_for(&self, _series_index: usize) -> usize { 0 }

    /// Plot used regardless of the window, if the family has one.
    fn fixed_plot(&self) -> Option<Plot> { None }

    /// Refresh the chunk tables. `calculators.len() == axis_count()`.
    fn preload(&self, calculators: &mut [PlotCalculator], chart: &Chart, visible: &VisibleSeries, sum: &StackSum);

    /// One unit-space path per series, hidden series included.
    fn build_paths(&self, chart: &Chart, visible: &VisibleSeries, sum: &StackSum) -> Vec<Path>;

    /// Vertical placement of `path` against `plot` in a viewport `height` pixels tall.
    fn build_transform(&self, plot: &Plot, path: &Path, height: f64) -> AffineTransform {
        transform_for_plot(plot, path.range, height)
    }
}

pub struct LineStrategy;

impl ChartStrategy for LineStrategy {
    fn kind(&self) -> ChartKind { ChartKind::Lines }
    fn zero_origin(&self) -> bool { false }

    fn preload(&self, calculators: &mut [PlotCalculator], chart: &Chart, visible: &VisibleSeries, _sum: &StackSum) {
        if let Some(calc) = calculators.first_mut() {
            calc.update_preloaded_plots(chart, visible);
        }
    }

    fn build_paths(&self, chart: &Chart, visible: &VisibleSeries, _sum: &StackSum) -> Vec<Path> {
        chart.series.iter().enumerate().map(|(i, s)| path_for_series(s, visible.contains(i))).collect()
    }
}

/// Two series, each with its own axis: leading for series 0, trailing for series 1.
pub struct TwoLinesStrategy;

impl ChartStrategy for TwoLinesStrategy {
    fn kind(&self) -> ChartKind { ChartKind::TwoLines }
    fn zero_origin(&self) -> bool { false }
    fn axis_count(&self) -> usize { 2 }
    fn axis_for(&self, series_index: usize) -> usize { series_index.min(1) }

    fn preload(&self, calculators: &mut [PlotCalculator], chart: &Chart, visible: &VisibleSeries, _sum: &StackSum) {
        for (axis, calc) in calculators.iter_mut().enumerate() {
            let own = VisibleSeries::from_indices(visible.iter().filter(|&i| self.axis_for(i) == axis));
            calc.update_preloaded_plots(chart, &own);
        }
    }

    fn build_paths(&self, chart: &Chart, visible: &VisibleSeries, _sum: &StackSum) -> Vec<Path> {
        chart.series.iter().enumerate().map(|(i, s)| path_for_series(s, visible.contains(i))).collect()
    }
}

/// Stacked bars; a single bar series is the one-layer case.
pub struct BarStrategy {
    pub kind: ChartKind,
}

impl ChartStrategy for BarStrategy {
    fn kind(&self) -> ChartKind { self.kind }
    fn zero_origin(&self) -> bool { true }

    fn preload(&self, calculators: &mut [PlotCalculator], _chart: &Chart, _visible: &VisibleSeries, sum: &StackSum) {
        if let Some(calc) = calculators.first_mut() {
            calc.update_preloaded_plots_from_sum(sum);
        }
    }

    fn build_paths(&self, chart: &Chart, visible: &VisibleSeries, sum: &StackSum) -> Vec<Path> {
        let paths = chart
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| bar_path_for_series(s, visible.contains(i), sum))
            .collect();
        stack_paths(paths)
    }
}

/// 100%-stacked areas; the pie detail view reuses the same sums.
pub struct PercentStrategy {
    pub kind: ChartKind,
}

impl ChartStrategy for PercentStrategy {
    fn kind(&self) -> ChartKind { self.kind }
    fn zero_origin(&self) -> bool { true }
    fn fixed_plot(&self) -> Option<Plot> { Some(PERCENT_PLOT) }

    fn preload(&self, calculators: &mut [PlotCalculator], _chart: &Chart, _visible: &VisibleSeries, sum: &StackSum) {
        if let Some(calc) = calculators.first_mut() {
            calc.update_preloaded_plots_from_sum(sum);
        }
    }

    fn build_paths(&self, chart: &Chart, visible: &VisibleSeries, sum: &StackSum) -> Vec<Path> {
        let paths = chart
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| percent_path_for_series(s, visible.contains(i), sum))
            .collect();
        stack_paths(paths)
    }

    fn build_transform(&self, _plot: &Plot, _path: &Path, height: f64) -> AffineTransform {
        transform_for_percent_plot(height)
    }
}

pub fn strategy_for(kind: ChartKind) -> Box<dyn ChartStrategy> {
    match kind {
        ChartKind::Lines => Box::new(LineStrategy),
        ChartKind::TwoLines => Box::new(TwoLinesStrategy),
        ChartKind::Bars | ChartKind::SingleBar => Box::new(BarStrategy { kind }),
        ChartKind::Percent | ChartKind::Pie => Box::new(PercentStrategy { kind }),
    }
}
