// File: crates/chart-core/src/pie.rs
// Summary: Pie slices for the percent detail view: angles, integer labels and label placement.

use std::f64::consts::PI;

use crate::chart::{Chart, VisibleSeries};
use crate::geometry::{clamp, Point};
use crate::percent::normalized_percents_of;
use crate::selection::SelectionWindow;

pub const START_ANGLE: f64 = -0.1 * PI;

const MIN_CENTER_OFFSET: f64 = 0.45;
const MAX_CENTER_OFFSET: f64 = 0.85;
const MIN_LABEL_SCALE: f64 = 1.0;
const MAX_LABEL_SCALE: f64 = 0.24;

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub series_index: usize,
    pub value: i64,
    /// Share of the total in `[0, 1]`.
    pub part: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Integer label; all labels sum to 100 unless every value is zero.
    pub percent: i64,
    /// Label center as a fraction of the radius along the slice's mid angle.
    pub label_offset: f64,
    pub label_scale: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 { (self.start_angle + self.end_angle) / 2.0 }

    /// Label center for a pie of `radius` around `center`.
    pub fn label_center(&self, center: Point, radius: f64) -> Point {
        let r = radius * self.label_offset;
        let angle = self.mid_angle();
        Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
    }

    pub fn label_visible(&self) -> bool { self.percent > 0 }
}

/// Slices for arbitrary values, in order.
pub fn slices_for_values(values: &[(usize, i64)]) -> Vec<PieSlice> {
    let raw: Vec<i64> = values.iter().map(|&(_, v)| v).collect();
    let percents = normalized_percents_of(&raw);
    let total: i64 = raw.iter().sum();

    let mut cumulative = 0.0;
    let mut previous_end = START_ANGLE;
    values
        .iter()
        .zip(percents)
        .map(|(&(series_index, value), percent)| {
            let part = if total > 0 { value as f64 / total as f64 } else { 0.0 };
            cumulative += part;
            let end_angle = START_ANGLE + 2.0 * PI * cumulative;
            let label_percent = 1.0 - clamp(part * 3.0, 0.0, 1.0);
            let slice = PieSlice {
                series_index,
                value,
                part,
                start_angle: previous_end,
                end_angle,
                percent,
                label_offset: MIN_CENTER_OFFSET + (MAX_CENTER_OFFSET - MIN_CENTER_OFFSET) * label_percent,
                label_scale: MIN_LABEL_SCALE + (MAX_LABEL_SCALE - MIN_LABEL_SCALE) * label_percent,
            };
            previous_end = end_angle;
            slice
        })
        .collect()
}

/// One slice per visible series, sized by the series' sum over the window's legend indices.
pub fn slices_for_window(chart: &Chart, visible: &VisibleSeries, window: SelectionWindow) -> Vec<PieSlice> {
    let indices = chart.legend.index_range(window.lower, window.upper);
    let values: Vec<(usize, i64)> = chart
        .series
        .iter()
        .enumerate()
        .filter(|(i, _)| visible.contains(*i))
        .map(|(i, s)| (i, s.values().get(indices.clone()).map(|v| v.iter().sum()).unwrap_or(0)))
        .collect();
    slices_for_values(&values)
}
