// File: crates/chart-core/src/chart.rs
// Summary: Chart record (legend + series + flags), load-time validation and the visible-series set.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{ChartError, Result};
use crate::series::Series;

/// Ordered timestamps (milliseconds since the Unix epoch), one per data point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    timestamps: Vec<i64>,
}

impl Legend {
    pub fn new(timestamps: Vec<i64>) -> Self {
        Self { timestamps }
    }

    pub fn timestamps(&self) -> &[i64] { &self.timestamps }
    pub fn len(&self) -> usize { self.timestamps.len() }
    pub fn is_empty(&self) -> bool { self.timestamps.is_empty() }

    pub fn date(&self, index: usize) -> Option<DateTime<Utc>> {
        self.timestamps.get(index).and_then(|&ms| DateTime::from_timestamp_millis(ms))
    }

    /// Short axis label, e.g. "Mar 14".
    pub fn label(&self, index: usize) -> String {
        self.date(index).map(|d| d.format("%b %-d").to_string()).unwrap_or_default()
    }

    /// Long tooltip label, e.g. "Thu, 14 Mar 2019".
    pub fn long_label(&self, index: usize) -> String {
        self.date(index).map(|d| d.format("%a, %-d %b %Y").to_string()).unwrap_or_default()
    }

    /// Closed index range covered by a normalized window, clamped to the legend.
    pub fn index_range(&self, lower: f64, upper: f64) -> std::ops::RangeInclusive<usize> {
        let n = self.timestamps.len();
        if n == 0 {
            return 0..=0;
        }
        let len = n as f64;
        let hi = ((upper * len).ceil().max(0.0) as usize).min(n).saturating_sub(1);
        let lo = ((lower * len).floor().max(0.0) as usize).min(hi);
        lo..=hi
    }
}

/// Immutable chart data: one legend, one or more equal-length series, layout flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub legend: Legend,
    pub series: Vec<Series>,
    pub is_percentage: bool,
    pub is_stacked: bool,
    pub is_dual_axis: bool,
}

impl Chart {
    /// Validated constructor: legend non-empty and non-decreasing, every series as long as the legend.
    pub fn try_new(
        legend: Legend,
        series: Vec<Series>,
        is_percentage: bool,
        is_stacked: bool,
        is_dual_axis: bool,
    ) -> Result<Self> {
        if legend.is_empty() {
            return Err(ChartError::EmptyLegend);
        }
        if series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        if let Some(index) = legend.timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(ChartError::UnorderedLegend { index: index + 1 });
        }
        if let Some(s) = series.iter().find(|s| s.len() != legend.len()) {
            return Err(ChartError::LengthMismatch { id: s.id.clone(), expected: legend.len(), actual: s.len() });
        }
        Ok(Self { legend, series, is_percentage, is_stacked, is_dual_axis })
    }

    /// Loader policy: invalid input degrades to an empty chart that renders nothing.
    pub fn new_or_empty(
        legend: Legend,
        series: Vec<Series>,
        is_percentage: bool,
        is_stacked: bool,
        is_dual_axis: bool,
    ) -> Self {
        match Self::try_new(legend, series, is_percentage, is_stacked, is_dual_axis) {
            Ok(chart) => chart,
            Err(err) => {
                warn!(%err, "chart rejected, falling back to empty chart");
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() || self.legend.is_empty() }

    pub fn len(&self) -> usize { self.legend.len() }

    pub fn all_visible(&self) -> VisibleSeries { VisibleSeries::all(self.series.len()) }

    /// Series currently in `visible`, in chart order.
    pub fn visible_series<'a>(&'a self, visible: &'a VisibleSeries) -> impl Iterator<Item = &'a Series> + 'a {
        self.series.iter().enumerate().filter(move |(i, _)| visible.contains(*i)).map(|(_, s)| s)
    }
}

/// Set of visible series indices. Mutated only by the owner of a chart session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSeries {
    indices: BTreeSet<usize>,
}

impl VisibleSeries {
    pub fn all(count: usize) -> Self {
        Self { indices: (0..count).collect() }
    }

    pub fn none() -> Self { Self::default() }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self { indices: indices.into_iter().collect() }
    }

    pub fn contains(&self, index: usize) -> bool { self.indices.contains(&index) }
    pub fn len(&self) -> usize { self.indices.len() }
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ { self.indices.iter().copied() }

    pub fn insert(&mut self, index: usize) -> bool { self.indices.insert(index) }
    pub fn remove(&mut self, index: usize) -> bool { self.indices.remove(&index) }
}
