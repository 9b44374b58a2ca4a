// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV chart (time column + value columns), drives a ChartSession and prints frames.

use anyhow::{Context, Result};
use chart_core::config::{load_config, EngineConfig};
use chart_core::{
    Chart, ChartKind, ChartSession, Frame, Legend, SelectionWindow, Series, SeriesStyle, Size, Trimmer,
};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PALETTE: [&str; 6] = ["#3DC23F", "#F34C44", "#3497ED", "#F5BD25", "#9B59B6", "#65B9AC"];

/// Drive the chart engine from a CSV file and print the resulting frames.
#[derive(Parser, Debug)]
#[command(name = "timechart-demo")]
#[command(about = "Compute plots, transforms and animation frames for a CSV time chart")]
#[command(version)]
struct Args {
    /// CSV with a time column followed by one column per series. A header `name:bar` sets the style.
    input: PathBuf,

    /// Engine configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window as `lower:upper` in [0,1].
    #[arg(long)]
    window: Option<String>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 400.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 240.0)]
    height: f64,

    /// Force a chart kind (lines, two-lines, bars, single-bar, percent, pie).
    #[arg(long)]
    kind: Option<String>,

    #[arg(long)]
    stacked: bool,

    #[arg(long)]
    percentage: bool,

    #[arg(long)]
    dual: bool,

    /// Series indices to hide after the first frame; the following frames show the transition.
    #[arg(long, value_delimiter = ',')]
    hide: Vec<usize>,

    /// Pan the window by this many trimmer pixels after the first frame.
    #[arg(long, allow_hyphen_values = true)]
    drag: Option<f64>,

    /// Number of frames printed across one animation.
    #[arg(long, default_value_t = 4)]
    frames: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };

    let chart = load_chart_csv(&args.input, args.stacked, args.percentage, args.dual)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(points = chart.len(), series = chart.series.len(), "chart loaded");

    let kind = match args.kind.as_deref() {
        Some(name) => ChartKind::parse(name).with_context(|| format!("unknown chart kind '{name}'"))?,
        None => ChartKind::from_chart(&chart),
    };
    let viewport = Size::new(args.width, args.height);
    let duration = config.animation.duration;
    let mut trimmer = Trimmer::new(config.trimmer.clone(), args.width);
    let mut session = ChartSession::with_kind(chart, kind, config, viewport, false);

    if let Some(raw) = &args.window {
        let window = parse_window(raw)?;
        session.set_window(trimmer.set_window(window), 0.0);
    } else {
        trimmer.set_window(session.window());
    }
    print_frame(&session.frame(0.0), 0.0);

    let mut changed = false;
    for &index in &args.hide {
        if session.toggle_series(index, 0.0) {
            changed = true;
        } else {
            warn!(index, %kind, "series visibility not changed");
        }
    }
    if let Some(dx) = args.drag {
        let (x, w) = trimmer.handle_frame();
        trimmer.begin_drag(x + w / 2.0);
        if let Some(window) = trimmer.drag_by(dx) {
            session.set_window(window, 0.0);
            changed = true;
        }
        trimmer.end_drag();
    }
    if changed {
        let steps = args.frames.max(1);
        for i in 1..=steps {
            let now = duration * i as f64 / steps as f64;
            print_frame(&session.frame(now), now);
        }
    }

    if let Some(tip) = session.tooltip(args.width) {
        println!("tooltip @{}: {}", tip.index, tip.date_label);
        for e in &tip.entries {
            match e.percent {
                Some(p) => println!("  {:<12} {:>10} {:>3}%", e.name, e.value, p),
                None => println!("  {:<12} {:>10}", e.name, e.value),
            }
        }
        if let Some(total) = tip.total {
            println!("  {:<12} {:>10}", "All", total);
        }
    }
    Ok(())
}

fn print_frame(frame: &Frame, now: f64) {
    println!(
        "t={now:.3}s kind={} window=[{:.3}, {:.3}] content={:.0}px offset={:.0}px animating={}",
        frame.kind, frame.window.lower, frame.window.upper, frame.content_width, frame.content_offset, frame.animating
    );
    for (i, axis) in frame.axes.iter().enumerate() {
        let grid: Vec<String> = axis
            .grid
            .iter()
            .map(|g| format!("{}@{:.0}({:.2})", g.value, g.offset_y, g.opacity))
            .collect();
        println!("  axis {i}: {:?} grid [{}]", axis.plot, grid.join(" "));
    }
    for s in &frame.series {
        let first = s.points.first().map(|p| format!("({:.1}, {:.1})", p.x, p.y)).unwrap_or_default();
        let last = s.points.last().map(|p| format!("({:.1}, {:.1})", p.x, p.y)).unwrap_or_default();
        println!(
            "  series {} {} axis={} visible={} opacity={:.2} {} .. {}",
            s.id, s.color_hex, s.axis, s.visible, s.opacity, first, last
        );
    }
    let labels: Vec<String> = frame
        .labels
        .iter()
        .filter(|l| (0.0..=frame.viewport.width).contains(&l.x))
        .map(|l| format!("{}({:.2})", l.text, l.opacity))
        .collect();
    println!("  labels: {}", labels.join(", "));
    if let Some(slices) = &frame.pie {
        for slice in slices {
            println!(
                "  slice {} {:>3}% [{:.3}, {:.3}] rad",
                slice.series_index, slice.percent, slice.start_angle, slice.end_angle
            );
        }
    }
}

/// `lower:upper` (or `lower,upper`) in [0,1].
fn parse_window(raw: &str) -> Result<SelectionWindow> {
    let (lower, upper) = raw
        .split_once(|c| c == ':' || c == ',')
        .with_context(|| format!("window '{raw}' must look like lower:upper"))?;
    let lower: f64 = lower.trim().parse().with_context(|| format!("bad window lower bound '{lower}'"))?;
    let upper: f64 = upper.trim().parse().with_context(|| format!("bad window upper bound '{upper}'"))?;
    if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower >= upper {
        anyhow::bail!("window '{raw}' must satisfy 0 <= lower < upper <= 1");
    }
    Ok(SelectionWindow::new(lower, upper))
}

/// Load a chart: first column is time, every other column is one series.
fn load_chart_csv(path: &Path, stacked: bool, percentage: bool, dual: bool) -> Result<Chart> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.len() < 2 {
        anyhow::bail!("expected a time column and at least one value column, got {:?}", headers);
    }

    let mut timestamps = Vec::new();
    let mut columns: Vec<Vec<i64>> = vec![Vec::new(); headers.len() - 1];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(ts) = rec.get(0).and_then(parse_time_to_millis) else {
            warn!(row, "skipping row with unparsable time");
            continue;
        };
        let values: Option<Vec<i64>> = (1..headers.len())
            .map(|i| rec.get(i).and_then(|s| s.parse::<f64>().ok()).map(|v| v.round() as i64))
            .collect();
        let Some(values) = values else {
            warn!(row, "skipping row with missing values");
            continue;
        };
        timestamps.push(ts);
        for (col, v) in columns.iter_mut().zip(values) {
            col.push(v);
        }
    }

    let series = headers[1..]
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (header, values))| {
            let (name, style) = match header.split_once(':') {
                Some((name, style)) => (name, SeriesStyle::parse(style).unwrap_or(SeriesStyle::Line)),
                None => (header.as_str(), if stacked { SeriesStyle::Bar } else { SeriesStyle::Line }),
            };
            let style = if percentage { SeriesStyle::Area } else { style };
            Series::new(format!("y{i}"), name, PALETTE[i % PALETTE.len()], style, values)
        })
        .collect();

    Ok(Chart::try_new(Legend::new(timestamps), series, percentage, stacked, dual)?)
}

/// Epoch milliseconds, epoch seconds or a `YYYY-MM-DD[ HH:MM:SS]` date, all in UTC.
fn parse_time_to_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(11) {
            return Some(n);
        } // epoch ms
        return Some(n * 1000); // epoch sec
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
