use crate::services::forecast_types::{ConfidencePoint, ForecastReport};

pub fn format_forecast_report(report: &ForecastReport) -> String {
    let mut lines = Vec::new();
    lines.push("Forecast Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Mode: {}", report.mode));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!(
        "Lookback: {} days ({} in window)",
        report.lookback_days, report.window_days
    ));
    if let Some(days) = report.simulation_days {
        lines.push(format!("Time frame: {days} days"));
    }
    if let Some(items) = report.target_items {
        lines.push(format!("Items to complete: {items}"));
    }
    if let Some(start_date) = &report.start_date {
        lines.push(format!("Start date: {start_date}"));
    }
    lines.push(String::new());

    let outcome_header = if report.mode == "when" {
        "Done by"
    } else {
        "At least"
    };
    lines.push(format!("Confidence | {outcome_header}"));
    lines.push("-----------|---------".to_string());
    lines.push(format_confidence_row(&report.c50));
    lines.push(format_confidence_row(&report.c85));
    lines.push(format_confidence_row(&report.c95));

    lines.join("\n")
}

fn format_confidence_row(point: &ConfidencePoint) -> String {
    format!("C{:.0} | {}", point.probability, point.outcome)
}
