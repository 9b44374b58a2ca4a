// File: crates/chart-core/tests/pie_tooltip.rs
// Purpose: Pie slice geometry and labels; tooltip index lookup and contents.

use std::f64::consts::PI;

use chart_core::kind::ChartKind;
use chart_core::pie::{slices_for_values, slices_for_window, START_ANGLE};
use chart_core::tooltip::{index_at, tooltip_at};
use chart_core::{Chart, Legend, Plot, SelectionWindow, Series, SeriesStyle, VisibleSeries};

fn chart(values: Vec<Vec<i64>>, stacked: bool, percentage: bool) -> Chart {
    let n = values[0].len();
    let legend = Legend::new((0..n as i64).map(|i| 1_552_521_600_000 + i * 86_400_000).collect());
    let series = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| Series::new(format!("y{i}"), format!("Series {i}"), "#3DC23F", SeriesStyle::Bar, v))
        .collect();
    Chart::try_new(legend, series, percentage, stacked, false).expect("valid chart")
}

#[test]
fn slices_cover_the_circle() {
    let slices = slices_for_values(&[(0, 1), (1, 1), (2, 2)]);
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].start_angle, START_ANGLE);
    assert!((slices[2].end_angle - (START_ANGLE + 2.0 * PI)).abs() < 1e-9);
    assert_eq!(slices.iter().map(|s| s.percent).sum::<i64>(), 100);
    assert_eq!(slices[2].percent, 50);
    assert_eq!(slices[1].start_angle, slices[0].end_angle);
}

#[test]
fn small_slices_push_labels_outward() {
    let slices = slices_for_values(&[(0, 95), (1, 5)]);
    let (big, small) = (&slices[0], &slices[1]);
    assert_eq!(big.label_offset, 0.45);
    assert_eq!(big.label_scale, 1.0);
    assert!(small.label_offset > 0.7 && small.label_scale < 0.4);
    let c = small.label_center(chart_core::Point::new(0.0, 0.0), 100.0);
    assert!((c.x.hypot(c.y) - 100.0 * small.label_offset).abs() < 1e-9);
}

#[test]
fn zero_total_pie_has_hidden_labels() {
    let slices = slices_for_values(&[(0, 0), (1, 0)]);
    assert!(slices.iter().all(|s| s.part == 0.0 && !s.label_visible()));
}

#[test]
fn pie_sums_window_values_of_visible_series() {
    let ch = chart(vec![vec![1, 1, 1, 1], vec![3, 3, 3, 3], vec![5, 5, 5, 5]], false, true);
    let slices = slices_for_window(&ch, &VisibleSeries::from_indices([0, 1]), SelectionWindow::new(0.5, 1.0));
    assert_eq!(slices.iter().map(|s| (s.series_index, s.value)).collect::<Vec<_>>(), vec![(0, 2), (1, 6)]);
    assert_eq!(slices.iter().map(|s| s.percent).collect::<Vec<_>>(), vec![25, 75]);
}

#[test]
fn index_under_touch_is_clamped_to_window() {
    let ch = chart(vec![vec![0; 11]], false, false);
    assert_eq!(index_at(500.0, 1000.0, &ch, SelectionWindow::FULL), 5);
    assert_eq!(index_at(-40.0, 1000.0, &ch, SelectionWindow::FULL), 0);
    assert_eq!(index_at(0.0, 1000.0, &ch, SelectionWindow::new(0.5, 1.0)), 5);
}

#[test]
fn tooltip_for_stacked_bars_has_total() {
    let ch = chart(vec![vec![1, 2, 3], vec![4, 5, 6]], true, false);
    let plot = Plot::new(0, 10, 2);
    let tip = tooltip_at(&ch, &ch.all_visible(), ChartKind::Bars, SelectionWindow::FULL, &plot, 100.0, 100.0)
        .expect("tooltip");
    assert_eq!(tip.index, 2);
    assert_eq!(tip.date_label, "Sat, 16 Mar 2019");
    assert_eq!(tip.entries.iter().map(|e| e.value).collect::<Vec<_>>(), vec![3, 6]);
    assert_eq!(tip.total, Some(9));
    assert!(tip.entries.iter().all(|e| e.percent.is_none()));
    assert_eq!(tip.line_percent, 0.6);
    assert_eq!(tip.line_x, 100.0);
}

#[test]
fn tooltip_for_percent_chart_has_shares() {
    let ch = chart(vec![vec![1, 1], vec![3, 1]], true, true);
    let tip = tooltip_at(&ch, &ch.all_visible(), ChartKind::Percent, SelectionWindow::FULL, &Plot::new(0, 100, 25), 0.0, 50.0)
        .expect("tooltip");
    assert_eq!(tip.entries.iter().map(|e| e.percent).collect::<Vec<_>>(), vec![Some(25), Some(75)]);
    assert_eq!(tip.total, None);
    assert!(tooltip_at(&ch, &VisibleSeries::none(), ChartKind::Percent, SelectionWindow::FULL, &Plot::UNIT, 0.0, 50.0)
        .is_none());
}
