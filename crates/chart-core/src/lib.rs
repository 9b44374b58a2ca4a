// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart math engine (plots, transforms, animation, legend, trimmer).

pub mod animation;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gridline;
pub mod kind;
pub mod legend;
pub mod path;
pub mod percent;
pub mod pie;
pub mod plot_calculator;
pub mod pool;
pub mod selection;
pub mod series;
pub mod session;
pub mod stack;
pub mod theme;
pub mod tooltip;
pub mod transform;
pub mod types;

pub use animation::{AnimationHint, Animator, Interpolate, Keyframes, RetargetPolicy, Transition};
pub use axis::{nice_plot, nice_step, Plot, ValueRange};
pub use chart::{Chart, Legend, VisibleSeries};
pub use config::{load_config, parse_config, EngineConfig};
pub use error::{ChartError, ConfigError, Result};
pub use geometry::{AffineTransform, Point, Size};
pub use kind::{strategy_for, ChartKind, ChartStrategy};
pub use legend::{decimate, Decimation, LegendLabel, LegendLabels};
pub use path::Path;
pub use percent::normalize_percents;
pub use plot_calculator::{PlotCalculator, PlotOptions};
pub use selection::{DragState, SelectionWindow, Trimmer};
pub use series::{Series, SeriesStyle};
pub use session::{ChartSession, Frame, SeriesFrame};
pub use stack::StackSum;
pub use theme::{AppearanceRegistry, Rgba, SubscriptionId, Theme};
pub use tooltip::Tooltip;
