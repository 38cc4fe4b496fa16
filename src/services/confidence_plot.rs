use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfidencePlotError {
    #[error("failed to render confidence plot: {0}")]
    Render(String),
}

pub struct ConfidenceBar {
    pub label: String,
    pub probability: f64,
}

/// Renders a cumulative confidence curve as a PNG bar chart, one bar per
/// outcome with the cumulative probability on the y axis.
pub fn write_confidence_png(
    output_path: &str,
    bars: &[ConfidenceBar],
) -> Result<(), ConfidencePlotError> {
    if bars.is_empty() {
        return Ok(());
    }

    let max_x = bars.len() as i32;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ConfidencePlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Forecast Confidence", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..100.0f64)
        .map_err(|e| ConfidencePlotError::Render(e.to_string()))?;

    let label_count = bars.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Outcome")
        .y_desc("Confidence")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            bars.get(*index as usize)
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|probability| format!("{probability:.0}%"))
        .draw()
        .map_err(|e| ConfidencePlotError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            Rectangle::new(
                [(idx as i32, 0.0), (idx as i32 + 1, bar.probability)],
                bar_style,
            )
        }))
        .map_err(|e| ConfidencePlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ConfidencePlotError::Render(e.to_string()))?;
    Ok(())
}
