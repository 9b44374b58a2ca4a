// File: crates/chart-core/src/tooltip.rs
// Summary: Value box contents for a touch: index under the finger, values, shares and date.

use crate::axis::Plot;
use crate::chart::{Chart, VisibleSeries};
use crate::kind::ChartKind;
use crate::percent::normalized_percents_of;
use crate::selection::SelectionWindow;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub series_index: usize,
    pub name: String,
    pub color_hex: String,
    pub value: i64,
    /// Integer share, filled for percent charts only.
    pub percent: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    pub date_label: String,
    /// Vertical marker position in content coordinates.
    pub line_x: f64,
    pub entries: Vec<TooltipEntry>,
    /// "All" row for stacked bars with more than one visible series.
    pub total: Option<i64>,
    /// Height of the largest visible value as a fraction of the plot, used to keep the box clear of it.
    pub line_percent: f64,
}

/// Legend index under content x `x`, clamped to the indices the window shows.
pub fn index_at(x: f64, content_width: f64, chart: &Chart, window: SelectionWindow) -> usize {
    let n = chart.legend.len();
    if n == 0 || !(content_width > 0.0) {
        return 0;
    }
    let raw = (x / content_width * (n - 1) as f64).round();
    let range = chart.legend.index_range(window.lower, window.upper);
    let index = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    index.clamp(*range.start(), *range.end())
}

/// Build the value box for a touch at content x `x`. `None` when nothing is visible.
pub fn tooltip_at(
    chart: &Chart,
    visible: &VisibleSeries,
    kind: ChartKind,
    window: SelectionWindow,
    plot: &Plot,
    x: f64,
    content_width: f64,
) -> Option<Tooltip> {
    if chart.is_empty() || visible.is_empty() {
        return None;
    }
    let n = chart.legend.len();
    let index = index_at(x, content_width, chart, window);
    let columns: Vec<(usize, &crate::series::Series)> =
        chart.series.iter().enumerate().filter(|(i, _)| visible.contains(*i)).collect();
    let values: Vec<i64> = columns.iter().map(|(_, s)| s.values().get(index).copied().unwrap_or(0)).collect();

    let percents = matches!(kind, ChartKind::Percent | ChartKind::Pie).then(|| normalized_percents_of(&values));
    let entries = columns
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(k, ((series_index, s), &value))| TooltipEntry {
            series_index: *series_index,
            name: s.name.clone(),
            color_hex: s.color_hex.clone(),
            value,
            percent: percents.as_ref().map(|p| p[k]),
        })
        .collect();

    let total = (kind == ChartKind::Bars && values.len() > 1).then(|| values.iter().sum());
    let span = plot.span().max(1) as f64;
    let line_percent = values
        .iter()
        .map(|&v| (v - plot.lower) as f64 / span)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))))
        .unwrap_or(1.0);
    let line_x = if n > 1 { index as f64 / (n - 1) as f64 * content_width } else { 0.0 };

    Some(Tooltip { index, date_label: chart.legend.long_label(index), line_x, entries, total, line_percent })
}
