use chrono::{Duration, NaiveDate};
use rand::Rng;
use thiserror::Error;

use crate::domain::forecast::{ForecastDistribution, ForecastRequest, ForecastResult, Mode};
use crate::domain::throughput::DailyThroughput;
use crate::domain::work_item::WorkItemRecord;
use crate::services::distribution::{SortOrder, build_frequency_table, cumulative_curve};
use crate::services::throughput_builder::build_throughput;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("no closed work items match the selected team members")]
    EmptyInput,
    #[error("sampling window has no completed items, cannot forecast completion")]
    DegenerateWindow,
    #[error("lookback days must be greater than zero")]
    InvalidLookback,
    #[error("simulation days must be greater than zero")]
    InvalidSimulationDays,
    #[error("target item count must be greater than zero")]
    InvalidTargetItems,
    #[error("iterations must be greater than zero")]
    InvalidIterations,
}

/// Runs a full forecast: builds the throughput series from the records,
/// restricts it to the lookback window and resamples that window
/// `request.iterations` times.
pub fn run_forecast(
    request: &ForecastRequest,
    records: &[WorkItemRecord],
) -> Result<ForecastResult, ForecastError> {
    let mut rng = rand::thread_rng();
    run_forecast_with_rng(request, records, &mut rng)
}

pub fn run_forecast_with_rng<R: Rng + ?Sized>(
    request: &ForecastRequest,
    records: &[WorkItemRecord],
    rng: &mut R,
) -> Result<ForecastResult, ForecastError> {
    validate(request)?;

    let throughput = build_throughput(records, &request.selected_members)?;
    let window = sample_window(&throughput, request.lookback_days);

    let distribution = match request.mode {
        Mode::HowMany { simulation_days } => {
            let outcomes = sample_how_many(&window, simulation_days, request.iterations, rng);
            let frequencies = build_frequency_table(&outcomes);
            let curve = cumulative_curve(&frequencies, SortOrder::Descending);
            ForecastDistribution::HowMany { frequencies, curve }
        }
        Mode::When {
            start_date,
            target_items,
        } => {
            if window.iter().all(|count| *count == 0) {
                return Err(ForecastError::DegenerateWindow);
            }
            let outcomes = sample_when(&window, start_date, target_items, request.iterations, rng);
            let frequencies = build_frequency_table(&outcomes);
            let curve = cumulative_curve(&frequencies, SortOrder::Ascending);
            ForecastDistribution::When { frequencies, curve }
        }
    };

    Ok(ForecastResult {
        throughput,
        distribution,
    })
}

fn validate(request: &ForecastRequest) -> Result<(), ForecastError> {
    if request.lookback_days == 0 {
        return Err(ForecastError::InvalidLookback);
    }
    if request.iterations == 0 {
        return Err(ForecastError::InvalidIterations);
    }
    match request.mode {
        Mode::HowMany { simulation_days } if simulation_days == 0 => {
            Err(ForecastError::InvalidSimulationDays)
        }
        Mode::When { target_items, .. } if target_items == 0 => {
            Err(ForecastError::InvalidTargetItems)
        }
        _ => Ok(()),
    }
}

/// The tail-most `lookback_days` daily counts; the whole series when the
/// lookback exceeds it.
fn sample_window(throughput: &[DailyThroughput], lookback_days: usize) -> Vec<usize> {
    let start = throughput.len().saturating_sub(lookback_days);
    throughput[start..]
        .iter()
        .map(|day| day.completed_items)
        .collect()
}

/// Each trial sums `simulation_days` independent draws from the window,
/// with replacement.
fn sample_how_many<R: Rng + ?Sized>(
    window: &[usize],
    simulation_days: usize,
    iterations: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut outcomes = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut total = 0;
        for _ in 0..simulation_days {
            total += window[rng.gen_range(0..window.len())];
        }
        outcomes.push(total);
    }
    outcomes
}

/// Each trial draws one day at a time until the running total strictly
/// exceeds `target_items`; landing exactly on the target keeps drawing.
fn sample_when<R: Rng + ?Sized>(
    window: &[usize],
    start_date: NaiveDate,
    target_items: usize,
    iterations: usize,
    rng: &mut R,
) -> Vec<NaiveDate> {
    let mut outcomes = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut total = 0;
        let mut days = 0i64;
        while total <= target_items {
            total += window[rng.gen_range(0..window.len())];
            days += 1;
        }
        outcomes.push(start_date + Duration::days(days));
    }
    outcomes
}
