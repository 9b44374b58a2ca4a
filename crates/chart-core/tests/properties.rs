// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for plots, percent shares, label decimation, transforms and the trimmer.

use proptest::prelude::*;

use chart_core::axis::preferred_origin;
use chart_core::config::TrimmerConfig;
use chart_core::percent::normalized_percents_of;
use chart_core::transform::transform_for_plot;
use chart_core::types::{EMPTY_SPACE_THRESHOLD, TARGET_STEPS};
use chart_core::{decimate, nice_plot, DragState, Point, SelectionWindow, Trimmer, ValueRange};

proptest! {
    #[test]
    fn prop_plot_covers_range(min in 0i64..1_000_000_000, extra in 1i64..1_000_000_000) {
        let max = min + extra;
        let origin = preferred_origin(ValueRange::new(min, max), EMPTY_SPACE_THRESHOLD);
        let plot = nice_plot(max, origin, TARGET_STEPS);
        prop_assert!(plot.step > 0);
        prop_assert!(plot.upper > plot.lower);
        prop_assert!(plot.lower <= min, "{plot:?} for {min}..{max}");
        prop_assert!(plot.upper >= max, "{plot:?} for {min}..{max}");
    }

    #[test]
    fn prop_shares_sum_to_hundred(values in prop::collection::vec(0i64..10_000, 1..12)) {
        prop_assume!(values.iter().any(|&v| v > 0));
        let shares = normalized_percents_of(&values);
        prop_assert_eq!(shares.len(), values.len());
        prop_assert_eq!(shares.iter().sum::<i64>(), 100);
        prop_assert!(shares.iter().all(|&s| (0..=100).contains(&s)));
    }

    #[test]
    fn prop_coarser_decimation_is_subset(
        count in 1usize..2_000,
        width in 100.0f64..2_000.0,
        spacing in 10.0f64..200.0,
        factor in 1.0f64..8.0,
    ) {
        let fine = decimate(count, SelectionWindow::FULL, width, spacing);
        let coarse = decimate(count, SelectionWindow::FULL, width, spacing * factor);
        prop_assert!(coarse.stride >= fine.stride);
        prop_assert!(fine.stride.is_power_of_two() && coarse.stride.is_power_of_two());
        prop_assert_eq!(fine.labels[0].index, count - 1);
        for label in &coarse.labels {
            prop_assert!(fine.labels.iter().any(|f| f.index == label.index));
        }
    }

    #[test]
    fn prop_plot_transform_inverts(
        lower in -1_000i64..1_000,
        span in 1i64..100_000,
        height in 10.0f64..2_000.0,
        x in 0.0f64..1.0,
        y in 0.0f64..1.0,
    ) {
        let plot = chart_core::Plot::new(lower, lower + span, 1);
        let t = transform_for_plot(&plot, ValueRange::new(lower, lower + span / 2 + 1), height);
        let inverse = t.inverted().expect("invertible");
        let p = inverse.apply(t.apply(Point::new(x, y)));
        prop_assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9);
    }

    #[test]
    fn prop_center_drag_preserves_width(dx in -2_000.0f64..2_000.0, track in 200.0f64..2_000.0) {
        let mut trimmer = Trimmer::new(TrimmerConfig::default(), track);
        let before = trimmer.window().width();
        let (hx, hw) = trimmer.handle_frame();
        prop_assert_eq!(trimmer.begin_drag(hx + hw / 2.0), DragState::DraggingCenter);
        trimmer.drag_by(dx);
        let after = trimmer.window();
        prop_assert!((after.width() - before).abs() < 1e-9);
        prop_assert!(after.lower >= 0.0 && after.upper <= 1.0);
    }
}
