// File: crates/chart-core/src/path.rs
// Summary: Normalized drawable paths in [0,1]x[0,1], tagged with the value range used to build them.

use crate::axis::ValueRange;
use crate::geometry::{AffineTransform, Point};

/// Polyline in unit space (y grows downward, `y = 1` is the baseline).
///
/// `range` is the value interval that maps onto `y ∈ [1, 0]`, so placement transforms can be
/// built without going back to the series data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub values: Vec<i64>,
    pub range: ValueRange,
}

impl Path {
    pub fn new(points: Vec<Point>, values: Vec<i64>, range: ValueRange) -> Self {
        Self { points, values, range }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Stack `self` on top of `below`: heights add, the normalization range stays the same.
    /// Paths of different lengths cannot be stacked; `self` is returned unchanged.
    pub fn stacked_on(&self, below: &Path) -> Path {
        if self.points.len() != below.points.len() {
            return self.clone();
        }
        let points = self
            .points
            .iter()
            .zip(&below.points)
            .map(|(p, q)| Point::new(p.x, p.y + q.y - 1.0))
            .collect();
        let values = self.values.iter().zip(&below.values).map(|(a, b)| a + b).collect();
        Path { points, values, range: self.range }
    }

    /// Closed, fillable outline: baseline at x=0, every point, baseline at x=1.
    pub fn filled_outline(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.points.len() + 2);
        out.push(Point::new(0.0, 1.0));
        out.extend_from_slice(&self.points);
        out.push(Point::new(1.0, 1.0));
        out
    }

    /// Points mapped through a placement transform.
    pub fn transformed(&self, transform: &AffineTransform) -> Vec<Point> {
        self.points.iter().map(|p| transform.apply(*p)).collect()
    }

    /// Largest x coordinate; used to refit an on-screen path back into unit width.
    pub fn max_x(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(0.0, f64::max)
    }
}
