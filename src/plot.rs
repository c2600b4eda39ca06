//! Error-bar rendering of the convergence summary.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::stats::BucketSummary;

const PLOT_SIZE: (u32, u32) = (1200, 700);

/// Renders mean distance per bucket with whiskers at one standard deviation.
pub fn render_convergence(
    out_path: &Path,
    summaries: &[BucketSummary],
) -> Result<(), Box<dyn Error>> {
    if summaries.is_empty() {
        return Ok(());
    }

    let x_max = summaries.iter().map(|s| s.step).fold(0.0f64, f64::max);
    let y_lo = summaries
        .iter()
        .map(|s| s.mean - s.std_dev)
        .fold(0.0f64, f64::min);
    let mut y_hi = summaries
        .iter()
        .map(|s| s.mean + s.std_dev)
        .fold(0.0f64, f64::max);
    if y_hi <= y_lo {
        y_hi = y_lo + 1.0;
    }

    let root = BitMapBackend::new(out_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Convergence of Boxes Towards Goal Circle", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..x_max.max(1.0) * 1.02, y_lo..y_hi * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("World Steps")
        .y_desc("Mean Box Distance from Goal Shape")
        .draw()?;

    chart.draw_series(summaries.iter().map(|s| {
        ErrorBar::new_vertical(
            s.step,
            s.mean - s.std_dev,
            s.mean,
            s.mean + s.std_dev,
            RED.filled(),
            6,
        )
    }))?;

    chart.draw_series(LineSeries::new(
        summaries.iter().map(|s| (s.step, s.mean)),
        RED.stroke_width(1),
    ))?;

    root.present()?;
    Ok(())
}
