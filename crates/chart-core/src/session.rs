// File: crates/chart-core/src/session.rs
// Summary: Single-owner chart session: holds inputs, recomputes derived state in order, emits frames.
// Notes:
// - Recompute order on visibility change: StackSum → chunk tables → Plot → Paths → transforms.
// - Window changes only touch plots and transforms; paths are reused.

use tracing::{debug, trace};

use crate::animation::{AnimationHint, Animator, RetargetPolicy};
use crate::axis::Plot;
use crate::chart::{Chart, VisibleSeries};
use crate::config::EngineConfig;
use crate::geometry::{AffineTransform, Point, Size};
use crate::gridline::{GridLineFrame, GridLines};
use crate::kind::{strategy_for, ChartKind, ChartStrategy};
use crate::legend::{decimate_with, LegendLabels};
use crate::path::Path;
use crate::pie::{slices_for_window, PieSlice};
use crate::plot_calculator::{PlotCalculator, PlotOptions};
use crate::selection::SelectionWindow;
use crate::stack::StackSum;
use crate::tooltip::{tooltip_at, Tooltip};
use crate::transform::{container_offset, placement, transform_for_range};

/// Drawable state of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesFrame {
    pub series_index: usize,
    pub id: String,
    pub color_hex: String,
    pub visible: bool,
    pub opacity: f64,
    pub axis: usize,
    /// Unit-space path as currently displayed.
    pub path: Path,
    /// Vertical placement followed by the horizontal window scale.
    pub placement: AffineTransform,
    /// `path` mapped into viewport pixels, container offset applied.
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisFrame {
    pub plot: Plot,
    pub grid: Vec<GridLineFrame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelFrame {
    pub index: usize,
    pub text: String,
    /// Viewport x.
    pub x: f64,
    pub opacity: f64,
}

/// Everything a renderer needs for one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub kind: ChartKind,
    pub window: SelectionWindow,
    pub viewport: Size,
    pub content_width: f64,
    pub content_offset: f64,
    pub axes: Vec<AxisFrame>,
    pub series: Vec<SeriesFrame>,
    pub labels: Vec<LabelFrame>,
    pub pie: Option<Vec<PieSlice>>,
    pub animating: bool,
}

pub struct ChartSession {
    chart: Chart,
    strategy: Box<dyn ChartStrategy>,
    config: EngineConfig,
    policy: RetargetPolicy,
    visible: VisibleSeries,
    window: SelectionWindow,
    viewport: Size,
    sum: StackSum,
    calculators: Vec<PlotCalculator>,
    plots: Vec<Plot>,
    paths: Vec<Animator<Path>>,
    verticals: Vec<Animator<AffineTransform>>,
    opacities: Vec<Animator<f64>>,
    grids: Vec<GridLines>,
    legend: LegendLabels,
}

impl std::fmt::Debug for ChartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSession")
            .field("kind", &self.strategy.kind())
            .field("series", &self.chart.series.len())
            .field("visible", &self.visible)
            .field("window", &self.window)
            .field("viewport", &self.viewport)
            .field("plots", &self.plots)
            .finish()
    }
}

impl ChartSession {
    /// Session for the chart's natural kind.
    pub fn new(chart: Chart, config: EngineConfig, viewport: Size) -> Self {
        let kind = ChartKind::from_chart(&chart);
        Self::with_kind(chart, kind, config, viewport, false)
    }

    /// `simplified` selects the overview chunking (a single chunk, the whole range).
    pub fn with_kind(chart: Chart, kind: ChartKind, config: EngineConfig, viewport: Size, simplified: bool) -> Self {
        let strategy = strategy_for(kind);
        let policy = RetargetPolicy::from_config(&config.animation);
        let options = PlotOptions::from_config(&config.plot, simplified, strategy.zero_origin());
        let axes = strategy.axis_count();
        let window = if simplified {
            SelectionWindow::FULL
        } else {
            SelectionWindow::trailing(config.trimmer.default_visibility)
        };
        let visible = chart.all_visible();
        let mut session = Self {
            calculators: vec![PlotCalculator::new(options); axes],
            plots: vec![Plot::UNIT; axes],
            grids: (0..axes).map(|_| GridLines::new(policy.duration)).collect(),
            legend: LegendLabels::new(policy),
            paths: Vec::new(),
            verticals: Vec::new(),
            opacities: Vec::new(),
            sum: StackSum::default(),
            chart,
            strategy,
            config,
            policy,
            visible,
            window,
            viewport,
        };
        session.rebuild(0.0, AnimationHint::INSTANT);
        debug!(kind = %kind, series = session.chart.series.len(), points = session.chart.len(), "chart session created");
        session
    }

    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn kind(&self) -> ChartKind { self.strategy.kind() }
    pub fn visible(&self) -> &VisibleSeries { &self.visible }
    pub fn window(&self) -> SelectionWindow { self.window }
    pub fn viewport(&self) -> Size { self.viewport }
    pub fn plots(&self) -> &[Plot] { &self.plots }
    pub fn stack_sum(&self) -> &StackSum { &self.sum }

    fn hint(&self, animated: bool) -> AnimationHint {
        if animated { AnimationHint::animated(self.chart.len()) } else { AnimationHint::INSTANT }
    }

    pub fn set_window(&mut self, window: SelectionWindow, now: f64) {
        if window == self.window {
            return;
        }
        self.window = window;
        let changed = self.refresh_plots();
        if changed {
            self.retarget_transforms(now, self.hint(true));
        }
        self.refresh_grid(now, true);
        self.refresh_legend(now, true);
        trace!(lower = window.lower, upper = window.upper, changed, "window updated");
    }

    /// Replace the visible set. Refused (returns false) for kinds that cannot hide series and for
    /// an empty set.
    pub fn set_visible(&mut self, visible: VisibleSeries, now: f64) -> bool {
        if !self.strategy.supports_column_visibility() || visible.is_empty() {
            return false;
        }
        if visible == self.visible {
            return true;
        }
        self.visible = visible;
        self.rebuild(now, self.hint(true));
        true
    }

    /// Flip one series. Hiding the last visible series is refused.
    pub fn toggle_series(&mut self, index: usize, now: f64) -> bool {
        if index >= self.chart.series.len() {
            return false;
        }
        let mut next = self.visible.clone();
        if !next.remove(index) {
            next.insert(index);
        }
        self.set_visible(next, now)
    }

    pub fn set_viewport(&mut self, viewport: Size, now: f64) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.retarget_transforms(now, AnimationHint::INSTANT);
        self.refresh_grid(now, false);
        self.refresh_legend(now, false);
    }

    /// Full recompute after a data or visibility change.
    fn rebuild(&mut self, now: f64, hint: AnimationHint) {
        self.sum = StackSum::compute(&self.chart, &self.visible);
        self.strategy.preload(&mut self.calculators, &self.chart, &self.visible, &self.sum);
        self.refresh_plots();

        let paths = if self.chart.is_empty() {
            Vec::new()
        } else {
            self.strategy.build_paths(&self.chart, &self.visible, &self.sum)
        };
        if self.paths.len() != paths.len() {
            self.paths = paths.iter().map(|p| Animator::new(p.clone(), self.policy)).collect();
            self.verticals = paths.iter().map(|_| Animator::new(AffineTransform::IDENTITY, self.policy)).collect();
            self.opacities = (0..paths.len()).map(|_| Animator::new(1.0, self.policy)).collect();
        }
        for (animator, path) in self.paths.iter_mut().zip(paths) {
            animator.set_target(path, now, hint);
        }
        for (i, opacity) in self.opacities.iter_mut().enumerate() {
            let target = if self.visible.contains(i) { 1.0 } else { 0.0 };
            if *opacity.target() != target {
                opacity.set_target(target, now, hint);
            }
        }
        self.retarget_transforms(now, hint);
        self.refresh_grid(now, hint.animated);
        self.refresh_legend(now, hint.animated);
        debug!(visible = self.visible.len(), plots = ?self.plots, "chart session rebuilt");
    }

    /// Re-query every axis. Returns true when any plot changed.
    fn refresh_plots(&mut self) -> bool {
        let fixed = self.strategy.fixed_plot();
        let mut changed = false;
        for (plot, calc) in self.plots.iter_mut().zip(&self.calculators) {
            let next = fixed.unwrap_or_else(|| calc.vertical_plot(self.window));
            changed |= next != *plot;
            *plot = next;
        }
        changed
    }

    fn retarget_transforms(&mut self, now: f64, hint: AnimationHint) {
        let height = self.viewport.height;
        for (i, vertical) in self.verticals.iter_mut().enumerate() {
            let axis = self.strategy.axis_for(i).min(self.plots.len().saturating_sub(1));
            let Some(plot) = self.plots.get(axis) else { continue };
            let target = self.strategy.build_transform(plot, self.paths[i].target(), height);
            if *vertical.target() != target {
                vertical.set_target(target, now, hint);
            }
        }
    }

    fn refresh_grid(&mut self, now: f64, animated: bool) {
        for (grid, plot) in self.grids.iter_mut().zip(&self.plots) {
            grid.update(*plot, self.viewport.height, now, animated);
        }
    }

    fn refresh_legend(&mut self, now: f64, animated: bool) {
        let decimation = decimate_with(self.chart.len(), self.window, self.viewport.width, &self.config.legend);
        self.legend.update(&decimation, now, animated);
    }

    /// Tooltip for a touch at viewport x `x`.
    pub fn tooltip(&self, x: f64) -> Option<Tooltip> {
        let (content_width, offset) = container_offset(self.window, self.viewport.width);
        let plot = self.plots.first().copied().unwrap_or(Plot::UNIT);
        tooltip_at(&self.chart, &self.visible, self.kind(), self.window, &plot, x + offset, content_width)
    }

    /// Snapshot at `now`. Finished transitions are dropped as a side effect.
    pub fn frame(&mut self, now: f64) -> Frame {
        for a in &mut self.paths {
            a.settle(now);
        }
        for a in &mut self.verticals {
            a.settle(now);
        }
        for a in &mut self.opacities {
            a.settle(now);
        }
        self.legend.prune(now);

        let (content_width, content_offset) = container_offset(self.window, self.viewport.width);
        let horizontal = transform_for_range(self.window, self.viewport.width);
        let shift = AffineTransform::translation(-content_offset, 0.0);
        let animating = self.paths.iter().any(|a| a.is_animating(now))
            || self.verticals.iter().any(|a| a.is_animating(now))
            || self.opacities.iter().any(|a| a.is_animating(now));

        let series = self
            .chart
            .series
            .iter()
            .enumerate()
            .zip(self.paths.iter().zip(self.verticals.iter().zip(&self.opacities)))
            .map(|((i, s), (path, (vertical, opacity)))| {
                let path = path.value(now);
                let placement = placement(&vertical.value(now), &horizontal);
                let points = path.transformed(&placement.concatenating(&shift));
                SeriesFrame {
                    series_index: i,
                    id: s.id.clone(),
                    color_hex: s.color_hex.clone(),
                    visible: self.visible.contains(i),
                    opacity: opacity.value(now),
                    axis: self.strategy.axis_for(i),
                    path,
                    placement,
                    points,
                }
            })
            .collect();

        let axes = self
            .plots
            .iter()
            .zip(&self.grids)
            .map(|(plot, grid)| AxisFrame { plot: *plot, grid: grid.frame(now) })
            .collect();

        let labels = self
            .legend
            .visible(now)
            .into_iter()
            .map(|l| LabelFrame {
                index: l.index,
                text: self.chart.legend.label(l.index),
                x: l.x - content_offset,
                opacity: l.opacity,
            })
            .collect();

        let pie = (self.kind() == ChartKind::Pie).then(|| slices_for_window(&self.chart, &self.visible, self.window));

        Frame {
            kind: self.kind(),
            window: self.window,
            viewport: self.viewport,
            content_width,
            content_offset,
            axes,
            series,
            labels,
            pie,
            animating,
        }
    }
}
