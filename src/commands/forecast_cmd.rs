use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::domain::forecast::{ForecastRequest, Mode};
use crate::services::confidence_plot::{ConfidenceBar, write_confidence_png};
use crate::services::forecast_types::build_forecast_output;
use crate::services::histogram::{HistogramBar, write_histogram_png};
use crate::services::simulation::run_forecast;
use crate::services::work_items_yaml::deserialize_work_items_from_yaml_str;

pub fn how_many_command(cmd: Commands) {
    if let Commands::HowMany {
        input,
        member,
        last_days,
        days,
        iterations,
        output,
    } = cmd
    {
        let request = ForecastRequest {
            selected_members: member,
            lookback_days: last_days,
            iterations,
            mode: Mode::HowMany {
                simulation_days: days,
            },
        };
        run_and_write(&input, &output, &request);
    }
}

pub fn when_command(cmd: Commands) {
    if let Commands::When {
        input,
        member,
        last_days,
        items,
        start_date,
        iterations,
        output,
    } = cmd
    {
        let start_date = match NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Invalid start date: {start_date}");
                return;
            }
        };
        let request = ForecastRequest {
            selected_members: member,
            lookback_days: last_days,
            iterations,
            mode: Mode::When {
                start_date,
                target_items: items,
            },
        };
        run_and_write(&input, &output, &request);
    }
}

fn run_and_write(input: &str, output: &str, request: &ForecastRequest) {
    let contents = match std::fs::read_to_string(input) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read work item records: {e:?}");
            return;
        }
    };
    let records = match deserialize_work_items_from_yaml_str(&contents) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to parse work item records: {e:?}");
            return;
        }
    };

    let result = match run_forecast(request, &records) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to forecast: {e}");
            return;
        }
    };

    let forecast = build_forecast_output(&result, request, &data_source_name(input));

    let yaml = match serde_yaml::to_string(&forecast) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize forecast output: {e:?}");
            return;
        }
    };
    if let Err(e) = std::fs::write(output, yaml) {
        eprintln!("Failed to write forecast output: {e:?}");
        return;
    }

    let histogram_path = format!("{output}.histogram.png");
    let histogram_bars: Vec<HistogramBar> = forecast
        .distribution
        .iter()
        .map(|row| HistogramBar {
            label: row.outcome.clone(),
            frequency: row.frequency,
        })
        .collect();
    if let Err(e) = write_histogram_png(&histogram_path, &histogram_bars) {
        eprintln!("Failed to render histogram: {e:?}");
        return;
    }

    let confidence_path = format!("{output}.confidence.png");
    let confidence_bars: Vec<ConfidenceBar> = forecast
        .curve
        .iter()
        .map(|row| ConfidenceBar {
            label: row.outcome.clone(),
            probability: row.probability,
        })
        .collect();
    if let Err(e) = write_confidence_png(&confidence_path, &confidence_bars) {
        eprintln!("Failed to render confidence plot: {e:?}");
        return;
    }

    println!("{}", format_forecast_report(&forecast.report));
    println!("Forecast written to {output}");
    println!("Distribution histogram written to {histogram_path}");
    println!("Confidence plot written to {confidence_path}");
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
