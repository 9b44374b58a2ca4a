// File: crates/chart-core/tests/session.rs
// Purpose: End-to-end chart session: recompute order, visibility policy, retargeting and frames.

use chart_core::config::EngineConfig;
use chart_core::kind::PERCENT_PLOT;
use chart_core::{Chart, ChartKind, ChartSession, Legend, SelectionWindow, Series, SeriesStyle, Size, VisibleSeries};

const VIEWPORT: Size = Size::new(400.0, 200.0);

fn chart(styles: SeriesStyle, stacked: bool, percentage: bool, dual: bool) -> Chart {
    let n = 100i64;
    let legend = Legend::new((0..n).map(|i| 1_552_521_600_000 + i * 86_400_000).collect());
    let a = Series::with_values("a", styles, (0..n).collect());
    let b = Series::with_values("b", styles, (0..n).map(|i| 1000 + 2 * i).collect());
    Chart::try_new(legend, vec![a, b], percentage, stacked, dual).expect("valid chart")
}

fn lines() -> ChartSession {
    ChartSession::new(chart(SeriesStyle::Line, false, false, false), EngineConfig::default(), VIEWPORT)
}

#[test]
fn initial_frame_shows_trailing_window() {
    let mut session = lines();
    assert_eq!(session.kind(), ChartKind::Lines);
    assert_eq!(session.window(), SelectionWindow::new(0.75, 1.0));

    let frame = session.frame(0.0);
    assert!(!frame.animating);
    assert_eq!(frame.series.len(), 2);
    assert_eq!(frame.axes.len(), 1);
    assert!(frame.series.iter().all(|s| s.visible && s.opacity == 1.0 && s.points.len() == 100));
    // Newest point sits on the right edge of the viewport.
    let last = frame.series[0].points[99];
    assert!((last.x - VIEWPORT.width).abs() < 1e-6, "{last:?}");
    assert!(!frame.labels.is_empty());
    assert_eq!(frame.labels.iter().map(|l| l.index).max(), Some(99));
    assert!(frame.pie.is_none());
    assert!(!frame.axes[0].grid.is_empty());
}

#[test]
fn hiding_a_series_rescales_and_fades() {
    let mut session = lines();
    let before = session.plots()[0];
    assert!(session.toggle_series(1, 0.0));
    let after = session.plots()[0];
    assert!(after.upper < before.upper, "{before:?} -> {after:?}");

    let start = session.frame(0.0);
    assert!(start.animating);
    assert_eq!(start.series[1].opacity, 1.0);
    assert!(!start.series[1].visible);

    let end = session.frame(1.0);
    assert!(!end.animating);
    assert_eq!(end.series[1].opacity, 0.0);
}

#[test]
fn last_visible_series_cannot_be_hidden() {
    let mut session = lines();
    assert!(session.toggle_series(1, 0.0));
    assert!(!session.toggle_series(0, 0.0));
    assert!(!session.set_visible(VisibleSeries::none(), 0.0));
    assert!(!session.toggle_series(7, 0.0));
    assert_eq!(session.visible(), &VisibleSeries::from_indices([0]));
}

#[test]
fn dual_axis_keeps_two_plots_and_fixed_visibility() {
    let mut session =
        ChartSession::new(chart(SeriesStyle::Line, false, false, true), EngineConfig::default(), VIEWPORT);
    assert_eq!(session.kind(), ChartKind::TwoLines);
    assert_eq!(session.plots().len(), 2);
    assert!(session.plots()[1].lower > session.plots()[0].upper);
    assert!(!session.toggle_series(0, 0.0));
    let frame = session.frame(0.0);
    assert_eq!(frame.series.iter().map(|s| s.axis).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn stacked_bars_use_zero_origin() {
    let mut session =
        ChartSession::new(chart(SeriesStyle::Bar, true, false, false), EngineConfig::default(), VIEWPORT);
    assert_eq!(session.kind(), ChartKind::Bars);
    assert_eq!(session.plots()[0].lower, 0);
    assert_eq!(session.stack_sum().values[99], 99 + 1198);
    let frame = session.frame(0.0);
    assert_eq!(frame.series[0].points.len(), 200);
    // The top layer is drawn above the bottom one.
    assert!(frame.series[1].points[199].y < frame.series[0].points[199].y);
}

#[test]
fn percent_and_pie_kinds() {
    let data = chart(SeriesStyle::Area, true, true, false);
    let mut percent = ChartSession::new(data.clone(), EngineConfig::default(), VIEWPORT);
    assert_eq!(percent.kind(), ChartKind::Percent);
    assert_eq!(percent.plots()[0], PERCENT_PLOT);
    let top = percent.frame(0.0).series[1].points[50];
    assert!(top.y.abs() < 1e-6, "stack fills the height: {top:?}");

    let mut pie = ChartSession::with_kind(data, ChartKind::Pie, EngineConfig::default(), VIEWPORT, false);
    let slices = pie.frame(0.0).pie.expect("pie slices");
    assert_eq!(slices.len(), 2);
    assert_eq!(slices.iter().map(|s| s.percent).sum::<i64>(), 100);
}

#[test]
fn window_retarget_continues_from_displayed_transform() {
    let mut session = lines();
    session.set_window(SelectionWindow::new(0.0, 0.25), 0.0);
    let before = session.frame(0.1).series[0].placement;
    assert!(session.frame(0.1).animating);

    session.set_window(SelectionWindow::new(0.5, 0.75), 0.1);
    let after = session.frame(0.1).series[0].placement;
    assert!((before.d - after.d).abs() < 1e-9);
    assert!((before.ty - after.ty).abs() < 1e-9);
    assert!(!session.frame(5.0).animating);
}

#[test]
fn overview_mode_covers_everything() {
    let session = ChartSession::with_kind(
        chart(SeriesStyle::Line, false, false, false),
        ChartKind::Lines,
        EngineConfig::default(),
        VIEWPORT,
        true,
    );
    assert_eq!(session.window(), SelectionWindow::FULL);
    assert!(session.plots()[0].upper >= 1198);
}

#[test]
fn viewport_and_tooltip() {
    let mut session = lines();
    session.set_viewport(Size::new(800.0, 400.0), 0.0);
    let frame = session.frame(0.0);
    assert!(!frame.animating);
    assert!((frame.series[0].points[99].x - 800.0).abs() < 1e-6);

    let tip = session.tooltip(800.0).expect("tooltip");
    assert_eq!(tip.index, 99);
    assert_eq!(tip.entries.len(), 2);
    // Left edge rounds to index 74, outside the window's first index.
    let tip = session.tooltip(0.0).expect("tooltip");
    assert_eq!(tip.index, 75);
}

#[test]
fn empty_chart_renders_nothing() {
    let mut session = ChartSession::new(Chart::empty(), EngineConfig::default(), VIEWPORT);
    let frame = session.frame(0.0);
    assert!(frame.series.is_empty());
    assert!(frame.labels.is_empty());
    assert!(session.tooltip(10.0).is_none());
}

#[test]
fn kind_names_and_detail_views() {
    assert_eq!(ChartKind::parse("Two-Lines"), Some(ChartKind::TwoLines));
    assert_eq!(ChartKind::parse("radar"), None);
    assert_eq!(ChartKind::Percent.details_kind(), ChartKind::Pie);
    assert_eq!(ChartKind::SingleBar.details_kind(), ChartKind::Lines);
    assert_eq!(ChartKind::Bars.details_kind(), ChartKind::Bars);
    assert_eq!(ChartKind::SingleBar.to_string(), "single-bar");
    let single = Chart::try_new(
        Legend::new(vec![0, 1]),
        vec![Series::with_values("a", SeriesStyle::Bar, vec![1, 2])],
        false,
        false,
        false,
    )
    .expect("valid chart");
    assert_eq!(ChartKind::from_chart(&single), ChartKind::SingleBar);
}
