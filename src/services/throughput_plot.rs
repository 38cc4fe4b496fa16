use plotters::prelude::*;
use thiserror::Error;

use crate::domain::throughput::DailyThroughput;

#[derive(Error, Debug)]
pub enum ThroughputPlotError {
    #[error("failed to render throughput plot: {0}")]
    Plot(String),
}

/// Renders a throughput series as a PNG line chart. Callers usually pass
/// the weekly aggregate rather than the raw daily series.
pub fn write_throughput_png(
    output_path: &str,
    throughput: &[DailyThroughput],
) -> Result<(), ThroughputPlotError> {
    if throughput.is_empty() {
        return Ok(());
    }

    let max_completed = throughput
        .iter()
        .map(|item| item.completed_items)
        .max()
        .unwrap_or(0);
    let max_y = max_completed.saturating_add(1).max(1) as i32;
    let max_x = throughput.len().max(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Throughput", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let label_count = throughput.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Completed items")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            throughput
                .get(*index as usize)
                .map(|item| item.date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            throughput
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx as i32, item.completed_items as i32)),
            &line_color,
        ))
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ThroughputPlotError::Plot(e.to_string()))?;
    Ok(())
}
