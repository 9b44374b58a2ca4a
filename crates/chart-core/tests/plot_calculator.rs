// File: crates/chart-core/tests/plot_calculator.rs
// Purpose: Nice-step rounding, origin detection and chunked vertical autoscale.

use chart_core::axis::preferred_origin;
use chart_core::config::PlotConfig;
use chart_core::types::EMPTY_SPACE_THRESHOLD_STRICT;
use chart_core::{
    nice_plot, nice_step, Chart, Legend, Plot, PlotCalculator, PlotOptions, SelectionWindow, Series, SeriesStyle,
    StackSum, ValueRange,
};

fn ramp_chart(n: usize) -> Chart {
    let legend = Legend::new((0..n as i64).map(|i| 1_550_000_000_000 + i * 86_400_000).collect());
    let series = Series::with_values("y0", SeriesStyle::Line, (0..n as i64).collect());
    Chart::try_new(legend, vec![series], false, false, false).expect("valid chart")
}

#[test]
fn nice_step_bases() {
    assert_eq!(nice_step(0.4), 1);
    assert_eq!(nice_step(3.2), 4);
    assert_eq!(nice_step(9.8), 10);
    assert_eq!(nice_step(18.0), 20);
    assert_eq!(nice_step(41.0), 50);
    assert_eq!(nice_step(123.0), 200);
    assert_eq!(nice_step(1800.0), 2000);
}

#[test]
fn nice_plot_zero_to_fifty() {
    // Values 0..50 (exclusive) with five steps from zero.
    assert_eq!(nice_plot(49, 0, 5.0), Plot::new(0, 50, 10));
}

#[test]
fn nice_plot_degenerate_range_is_default() {
    assert_eq!(nice_plot(7, 7, 5.5), Plot::DEFAULT);
    assert_eq!(nice_plot(3, 9, 5.5), Plot::DEFAULT);
}

#[test]
fn constant_window_gives_default_plot() {
    let legend = Legend::new(vec![1, 2, 3, 4]);
    let flat = Series::with_values("flat", SeriesStyle::Line, vec![42, 42, 42, 42]);
    let chart = Chart::try_new(legend, vec![flat], false, false, false).expect("valid chart");
    for zero_origin in [false, true] {
        let options = PlotOptions { zero_origin, ..PlotOptions::default() };
        let mut calc = PlotCalculator::new(options);
        calc.update_preloaded_plots(&chart, &chart.all_visible());
        assert_eq!(calc.vertical_plot(SelectionWindow::FULL), Plot::DEFAULT);
    }
}

#[test]
fn plot_line_values() {
    let plot = Plot::new(0, 50, 10);
    assert_eq!(plot.line_values(), vec![0, 10, 20, 30, 40, 50]);
    assert_eq!(plot.number_of_lines(), 6);
    assert!(plot.contains(50));
    assert!(!plot.contains(51));
}

#[test]
fn origin_snaps_to_zero_when_close() {
    assert_eq!(preferred_origin(ValueRange::new(10, 200), 0.2), 0);
    assert_eq!(preferred_origin(ValueRange::new(100, 200), 0.2), 100);
    assert_eq!(preferred_origin(ValueRange::new(1234, 1900), 0.2), 1200);
    // The stricter revision keeps zero for a wider band.
    assert_eq!(preferred_origin(ValueRange::new(150, 400), EMPTY_SPACE_THRESHOLD_STRICT), 0);
    assert_eq!(preferred_origin(ValueRange::new(150, 400), 0.2), 100);
}

#[test]
fn empty_calculator_returns_unit_plot() {
    let calc = PlotCalculator::default();
    assert_eq!(calc.vertical_plot(SelectionWindow::FULL), Plot::UNIT);
}

#[test]
fn full_window_plot_of_ramp() {
    let chart = ramp_chart(100);
    let mut calc = PlotCalculator::new(PlotOptions::default());
    calc.update_preloaded_plots(&chart, &chart.all_visible());
    assert_eq!(calc.chunks().len(), 20);
    assert_eq!(calc.vertical_plot(SelectionWindow::FULL), Plot::new(0, 110, 20));
}

#[test]
fn narrow_window_covers_its_values() {
    let chart = ramp_chart(100);
    let mut calc = PlotCalculator::new(PlotOptions::default());
    calc.update_preloaded_plots(&chart, &chart.all_visible());
    let plot = calc.vertical_plot(SelectionWindow::new(0.5, 1.0));
    assert!(plot.lower <= 50 && plot.upper >= 99, "{plot:?}");
    assert!(plot.lower > 0, "window far from zero should float: {plot:?}");
    let range = calc.window_range(SelectionWindow::new(0.5, 1.0)).expect("chunks");
    assert!(range.min <= 50 && range.max == 99);
}

#[test]
fn simplified_mode_uses_single_chunk() {
    let chart = ramp_chart(40);
    let options = PlotOptions::from_config(&PlotConfig::default(), true, false);
    let mut calc = PlotCalculator::new(options);
    calc.update_preloaded_plots(&chart, &chart.all_visible());
    assert_eq!(calc.chunks().len(), 1);
    assert_eq!(calc.chunks()[0], Plot::raw(ValueRange::new(0, 39)));
}

#[test]
fn stacked_sums_start_at_zero() {
    let sum = StackSum::from_values(vec![120, 130, 150, 170]);
    let options = PlotOptions::from_config(&PlotConfig::default(), false, true);
    let mut calc = PlotCalculator::new(options);
    calc.update_preloaded_plots_from_sum(&sum);
    let plot = calc.vertical_plot(SelectionWindow::FULL);
    assert_eq!(plot.lower, 0);
    assert!(plot.upper >= 170);
}

#[test]
fn hidden_series_do_not_affect_plot() {
    let legend = Legend::new(vec![1, 2, 3, 4]);
    let small = Series::with_values("small", SeriesStyle::Line, vec![1, 2, 3, 4]);
    let big = Series::with_values("big", SeriesStyle::Line, vec![1000, 2000, 3000, 4000]);
    let chart = Chart::try_new(legend, vec![small, big], false, false, false).expect("valid chart");
    let mut calc = PlotCalculator::new(PlotOptions::default());
    calc.update_preloaded_plots(&chart, &chart_core::VisibleSeries::from_indices([0]));
    let plot = calc.vertical_plot(SelectionWindow::FULL);
    assert!(plot.upper < 100, "{plot:?}");
}
