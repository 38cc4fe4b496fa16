use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

pub struct HistogramBar {
    pub label: String,
    pub frequency: usize,
}

/// Renders an outcome frequency table as a PNG bar chart. One bar per
/// distinct outcome, no binning.
pub fn write_histogram_png(output_path: &str, bars: &[HistogramBar]) -> Result<(), HistogramError> {
    if bars.is_empty() {
        return Ok(());
    }

    let max_count = bars.iter().map(|bar| bar.frequency).max().unwrap_or(1);
    let max_x = bars.len() as i32;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Monte Carlo Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let label_count = bars.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Outcome")
        .y_desc("Frequency")
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
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, bar.frequency)],
                bar_style,
            )
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
