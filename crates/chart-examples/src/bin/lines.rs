// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example: autoscale a line chart for a window and place its points in a viewport.

use chart_core::transform::{path_for_series, placement, transform_for_plot, transform_for_range};
use chart_core::{Chart, Legend, PlotCalculator, PlotOptions, SelectionWindow, Series, SeriesStyle};

fn main() -> chart_core::Result<()> {
    // One week of daily values
    let legend = Legend::new((0..7).map(|d| 1_552_521_600_000 + d * 86_400_000).collect());
    let series = Series::new("y0", "Joined", "#3DC23F", SeriesStyle::Line, vec![12, 30, 18, 41, 37, 49, 44]);
    let chart = Chart::try_new(legend, vec![series], false, false, false)?;

    let visible = chart.all_visible();
    let mut calc = PlotCalculator::new(PlotOptions::default());
    calc.update_preloaded_plots(&chart, &visible);

    let window = SelectionWindow::new(0.5, 1.0);
    let plot = calc.vertical_plot(window);
    println!("plot {:?} lines {:?}", plot, plot.line_values());

    let path = path_for_series(&chart.series[0], true);
    let (width, height) = (320.0, 200.0);
    let place = placement(&transform_for_plot(&plot, path.range, height), &transform_for_range(window, width));
    for (i, p) in path.transformed(&place).iter().enumerate() {
        println!("{:>12} {:>4} -> ({:>7.1}, {:>6.1})", chart.legend.label(i), chart.series[0].values()[i], p.x, p.y);
    }
    Ok(())
}
