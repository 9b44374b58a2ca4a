// File: crates/chart-core/src/types.rs
// Summary: Shared constants (durations, plot steps, legend spacing, trimmer limits).

/// Nominal duration, in seconds, shared by every chart transition.
pub const ANIMATION_DURATION: f64 = 0.30;

/// Number of horizontal grid intervals the nice-step search aims for.
pub const TARGET_STEPS: f64 = 5.5;

/// Chunks the [0,1] timeline is split into for plot precomputation.
pub const PLOT_CHUNKS: usize = 20;
/// Chunks used by the simplified (overview) rendering mode.
pub const SIMPLIFIED_PLOT_CHUNKS: usize = 1;

/// Largest `min/max` ratio for which a non-zero-origin chart still starts at 0.
pub const EMPTY_SPACE_THRESHOLD: f64 = 0.2;
/// Stricter variant of [`EMPTY_SPACE_THRESHOLD`] seen in later chart revisions.
pub const EMPTY_SPACE_THRESHOLD_STRICT: f64 = 0.4;

/// Series with at least this many points keep the full duration when retargeted; low-end devices
/// always keep it.
pub const RETARGET_POINT_THRESHOLD: usize = 300;

/// Horizontal inset, in pixels, applied on both sides of the legend row.
pub const LEGEND_HORIZONTAL_INSET: f64 = 36.0;
/// The visible legend row holds at most this many label slots.
pub const LEGEND_MAX_SPACE_DELIMITER: f64 = 4.0;

pub const TRIMMER_MIN_VISIBILITY: f64 = 0.10;
pub const TRIMMER_DEFAULT_VISIBILITY: f64 = 0.25;
pub const TRIMMER_MAX_VISIBILITY: f64 = 1.0;
/// Pixel distance within which a dragged trimmer edge snaps to the chart edge.
pub const TRIMMER_SNAP_THRESHOLD: f64 = 3.0;
