// File: crates/chart-core/src/stack.rs
// Summary: Per-index sums over the visible series of a stacked chart.

use crate::axis::ValueRange;
use crate::chart::{Chart, VisibleSeries};
use crate::series::slice_bounds;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackSum {
    pub values: Vec<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl StackSum {
    /// Sum the visible series index by index. Hidden series contribute nothing.
    pub fn compute(chart: &Chart, visible: &VisibleSeries) -> Self {
        let mut values = vec![0i64; chart.legend.len()];
        for series in chart.visible_series(visible) {
            for (sum, v) in values.iter_mut().zip(series.values()) {
                *sum += *v;
            }
        }
        Self::from_values(values)
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        let min_value = values.iter().copied().min();
        let max_value = values.iter().copied().max();
        Self { values, min_value, max_value }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Total at `index`, or 1 when the total is zero so it can be used as a denominator.
    pub fn total_or_one(&self, index: usize) -> f64 {
        match self.values.get(index) {
            Some(&v) if v != 0 => v as f64,
            _ => 1.0,
        }
    }

    /// Bounds of the sums whose indices fall in the normalized `[start, end]` slice.
    pub fn values_range_in(&self, start: f64, end: f64) -> ValueRange {
        ValueRange::of_slice(&self.values[slice_bounds(self.values.len(), start, end)])
    }
}
