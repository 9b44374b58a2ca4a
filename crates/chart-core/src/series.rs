// File: crates/chart-core/src/series.rs
// Summary: Series model: named integer column with style, color and cached value bounds.

use crate::axis::ValueRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesStyle {
    Line,
    Bar,
    Area,
}

impl SeriesStyle {
    /// Parse the style names used by chart data files ("line", "bar", "area").
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "area" => Some(Self::Area),
            _ => None,
        }
    }
}

/// One data column. Immutable once built; `min_value`/`max_value` are cached at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub color_hex: String,
    pub style: SeriesStyle,
    values: Vec<i64>,
    min_value: Option<i64>,
    max_value: Option<i64>,
}

impl Series {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color_hex: impl Into<String>,
        style: SeriesStyle,
        values: Vec<i64>,
    ) -> Self {
        let min_value = values.iter().copied().min();
        let max_value = values.iter().copied().max();
        Self { id: id.into(), name: name.into(), color_hex: color_hex.into(), style, values, min_value, max_value }
    }

    /// Shorthand used by tests and examples: id doubles as name, neutral color.
    pub fn with_values(id: impl Into<String>, style: SeriesStyle, values: Vec<i64>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, "#000000", style, values)
    }

    pub fn values(&self) -> &[i64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn min_value(&self) -> Option<i64> { self.min_value }
    pub fn max_value(&self) -> Option<i64> { self.max_value }

    /// Bounds of the values whose indices fall in the normalized `[start, end]` slice.
    /// An empty slice reports `0..=1`.
    pub fn values_range_in(&self, start: f64, end: f64) -> ValueRange {
        ValueRange::of_slice(&self.values[slice_bounds(self.values.len(), start, end)])
    }
}

/// Index range `floor(start*n) .. ceil(end*n)` clamped to `0..n`.
pub(crate) fn slice_bounds(n: usize, start: f64, end: f64) -> std::ops::Range<usize> {
    let len = n as f64;
    let lo = ((start * len).floor().max(0.0) as usize).min(n);
    let hi = ((end * len).ceil().max(0.0) as usize).min(n);
    lo..hi.max(lo)
}
