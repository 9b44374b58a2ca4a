// File: crates/chart-core/src/transform.rs
// Summary: Unit-space path builders and the affine placements that map them into the viewport.
// Notes:
// - Paths are built once per data/visibility change; window and plot changes only rebuild the
//   (cheap) transforms.
// - Horizontal panning is the container's offset (see `container_offset`), not part of the matrix.

use crate::axis::{Plot, ValueRange};
use crate::geometry::{AffineTransform, Point};
use crate::path::Path;
use crate::selection::SelectionWindow;
use crate::series::Series;
use crate::stack::StackSum;

/// Polyline for a line series: `x_i = i/(n-1)`, `y_i = 1 - (v_i - min)/(max - min)`.
/// Hidden series collapse onto the baseline so show/hide can animate.
pub fn path_for_series(series: &Series, visible: bool) -> Path {
    let range = match (series.min_value(), series.max_value()) {
        (Some(min), Some(max)) => ValueRange::new(min, max),
        _ => ValueRange::new(0, 1),
    };
    let segment = 1.0 / series.len().saturating_sub(1).max(1) as f64;
    let span = range.span_or_one();
    let points = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = if visible { 1.0 - (v - range.min) as f64 / span } else { 1.0 };
            Point::new(i as f64 * segment, y)
        })
        .collect();
    Path::new(points, series.values().to_vec(), range)
}

/// Step outline for a bar series: two points per index spanning `[i/n, (i+1)/n]`,
/// heights relative to `0..=sum.max`.
pub fn bar_path_for_series(series: &Series, visible: bool, sum: &StackSum) -> Path {
    let range = ValueRange::new(0, sum.max_value.unwrap_or(1));
    let segment = 1.0 / series.len().max(1) as f64;
    let span = range.span_or_one();
    let points = series
        .values()
        .iter()
        .enumerate()
        .flat_map(|(i, &v)| {
            let y = if visible { 1.0 - v as f64 / span } else { 1.0 };
            [Point::new(i as f64 * segment, y), Point::new((i + 1) as f64 * segment, y)]
        })
        .collect();
    Path::new(points, series.values().to_vec(), range)
}

/// Polyline for a 100%-stacked series: each value divided by the per-index total.
/// A zero total flattens that point onto the baseline.
pub fn percent_path_for_series(series: &Series, visible: bool, sum: &StackSum) -> Path {
    let range = ValueRange::new(0, sum.max_value.unwrap_or(1));
    let segment = 1.0 / series.len().saturating_sub(1).max(1) as f64;
    let points = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = if visible { 1.0 - v as f64 / sum.total_or_one(i) } else { 1.0 };
            Point::new(i as f64 * segment, y)
        })
        .collect();
    Path::new(points, series.values().to_vec(), range)
}

/// Prefix-sum stacking: every path sits on top of all paths before it.
pub fn stack_paths(paths: Vec<Path>) -> Vec<Path> {
    let mut out: Vec<Path> = Vec::with_capacity(paths.len());
    for path in paths {
        let stacked = match out.last() {
            Some(below) => path.stacked_on(below),
            None => path,
        };
        out.push(stacked);
    }
    out
}

/// Horizontal scale that stretches the selected window over `width` pixels.
pub fn transform_for_range(window: SelectionWindow, width: f64) -> AffineTransform {
    let span = window.width();
    let scale = if span > 0.0 { width / span } else { width };
    AffineTransform::scale(scale, 1.0)
}

/// Vertical placement of a unit path: path value range → plot → `height` pixels.
pub fn transform_for_plot(plot: &Plot, path_range: ValueRange, height: f64) -> AffineTransform {
    let to_values = AffineTransform::scale(1.0, path_range.span_or_one());
    let to_plot_top = AffineTransform::translation(0.0, (plot.upper - path_range.max) as f64);
    let to_bounds = AffineTransform::scale(1.0, height / plot.span().max(1) as f64);
    to_values.concatenating(&to_plot_top).concatenating(&to_bounds)
}

/// Percent paths are already relative to the per-index total; only the height applies.
pub fn transform_for_percent_plot(height: f64) -> AffineTransform {
    AffineTransform::scale(1.0, height)
}

/// Final placement: vertical first, then horizontal.
pub fn placement(vertical: &AffineTransform, horizontal: &AffineTransform) -> AffineTransform {
    vertical.concatenating(horizontal)
}

/// Upward translation of a grid line (anchored at the bottom) for `value`.
/// Values outside the plot are allowed; their lines simply leave the viewport.
pub fn transform_for_value_line(value: i64, plot: &Plot, height: f64) -> AffineTransform {
    let span = plot.span().max(1) as f64;
    let translate = (height / span * (value - plot.lower) as f64).round();
    AffineTransform::translation(0.0, -translate)
}

/// Width of the scrolling content and its left offset for a window over a `width`-pixel viewport.
pub fn container_offset(window: SelectionWindow, width: f64) -> (f64, f64) {
    let span = window.width();
    let content = if span > 0.0 { (width / span).ceil() } else { width };
    (content, content * window.lower)
}
