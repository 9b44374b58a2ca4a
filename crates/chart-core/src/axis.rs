// File: crates/chart-core/src/axis.rs
// Summary: Vertical axis model (Plot) and the "nice" step/origin rounding rules.

/// Closed integer value interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Bounds of a slice; an empty slice reports `0..=1`.
    pub fn of_slice(values: &[i64]) -> Self {
        match (values.iter().min(), values.iter().max()) {
            (Some(&min), Some(&max)) => Self { min, max },
            _ => Self { min: 0, max: 1 },
        }
    }

    pub fn union(&self, other: &ValueRange) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// `max - min`, or 1 when the bounds coincide so it can be used as a denominator.
    pub fn span_or_one(&self) -> f64 {
        if self.min != self.max { (self.max - self.min) as f64 } else { 1.0 }
    }
}

/// Vertical axis range with a grid step.
/// Contract: `upper > lower` and `step > 0` for every plot the engine hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Plot {
    pub lower: i64,
    pub upper: i64,
    pub step: i64,
}

impl Plot {
    /// Fallback for degenerate value ranges.
    pub const DEFAULT: Plot = Plot { lower: 0, upper: 5, step: 1 };
    /// Returned when no precomputed chunk covers the query.
    pub const UNIT: Plot = Plot { lower: 0, upper: 1, step: 1 };

    pub const fn new(lower: i64, upper: i64, step: i64) -> Self {
        Self { lower, upper, step }
    }

    /// Raw plot over a value range: no rounding, step 1.
    pub const fn raw(range: ValueRange) -> Self {
        Self { lower: range.min, upper: range.max, step: 1 }
    }

    pub const fn range(&self) -> ValueRange { ValueRange { min: self.lower, max: self.upper } }

    pub fn span(&self) -> i64 { self.upper - self.lower }

    pub fn number_of_lines(&self) -> i64 {
        if self.step <= 0 { return 1; }
        self.span() / self.step + 1
    }

    /// Grid line values `lower, lower+step, …` up to `upper`.
    pub fn line_values(&self) -> Vec<i64> {
        (0..self.number_of_lines()).map(|i| self.lower + i * self.step).collect()
    }

    pub fn contains(&self, value: i64) -> bool { self.lower <= value && value <= self.upper }
}

/// Round `value` up to the next multiple of `base`.
#[inline]
fn ceil_to(value: f64, base: i64) -> i64 {
    ((value / base as f64).ceil() * base as f64) as i64
}

/// Round `value` down to the previous multiple of `base`.
#[inline]
fn floor_to(value: f64, base: i64) -> i64 {
    ((value / base as f64).floor() * base as f64) as i64
}

/// `10^floor(log10(v))` for `v >= 1`.
#[inline]
fn power_of_ten_base(v: f64) -> i64 {
    10f64.powi(v.log10().floor() as i32) as i64
}

/// Step rounded up to a readable base: <4 → 1, <10 → 2, <30 → 4, <80 → 10, else a power of ten.
pub fn nice_step(raw_step: f64) -> i64 {
    let base = if raw_step < 4.0 {
        1
    } else if raw_step < 10.0 {
        2
    } else if raw_step < 30.0 {
        4
    } else if raw_step < 80.0 {
        10
    } else {
        power_of_ten_base(raw_step)
    };
    ceil_to(raw_step, base.max(1)).max(1)
}

/// Plot starting at `origin` that covers `max_value` in roughly `target_steps` nice steps.
pub fn nice_plot(max_value: i64, origin: i64, target_steps: f64) -> Plot {
    if origin >= max_value || !(target_steps > 0.0) {
        return Plot::DEFAULT;
    }
    let delta = (max_value - origin) as f64;
    let step = nice_step(delta / target_steps);
    let upper = (origin as f64 + step as f64 * target_steps) as i64;
    Plot::new(origin, upper.max(origin + step), step)
}

/// Origin for charts that do not start at zero.
///
/// Charts whose minimum sits close enough to zero (ratio below `empty_space_threshold`) start at
/// zero; otherwise the minimum is rounded down to the power of ten of the value spread.
pub fn preferred_origin(range: ValueRange, empty_space_threshold: f64) -> i64 {
    let ValueRange { min, max } = range;
    if min == max {
        return min;
    }
    if min > 0 && (min as f64 / max as f64) < empty_space_threshold {
        return 0;
    }
    let bucket = power_of_ten_base((max - min) as f64);
    floor_to(min as f64, bucket.max(1))
}
