use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::forecast::{
    CurvePoint, ForecastDistribution, ForecastRequest, ForecastResult, FrequencyEntry, Mode,
};
use crate::services::percentiles::outcome_at_confidence;

pub const CONFIDENCE_LEVELS: [f64; 3] = [50.0, 85.0, 95.0];

#[derive(Serialize, Debug, Clone)]
pub struct ConfidencePoint {
    pub probability: f64,
    pub outcome: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub mode: String,
    pub iterations: usize,
    pub lookback_days: usize,
    pub window_days: usize,
    pub simulation_days: Option<usize>,
    pub target_items: Option<usize>,
    pub start_date: Option<String>,
    pub c50: ConfidencePoint,
    pub c85: ConfidencePoint,
    pub c95: ConfidencePoint,
}

#[derive(Serialize, Debug, Clone)]
pub struct DistributionRow {
    pub outcome: String,
    pub frequency: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct CurveRow {
    pub outcome: String,
    pub frequency: usize,
    pub probability: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastOutput {
    pub report: ForecastReport,
    pub distribution: Vec<DistributionRow>,
    pub curve: Vec<CurveRow>,
}

/// Flattens a forecast result into the serializable output document:
/// a summary report plus the raw frequency table and confidence curve.
pub fn build_forecast_output(
    result: &ForecastResult,
    request: &ForecastRequest,
    data_source: &str,
) -> ForecastOutput {
    let window_days = result.throughput.len().min(request.lookback_days);

    let (mode, simulation_days, target_items, start_date) = match &request.mode {
        Mode::HowMany { simulation_days } => {
            ("how-many".to_string(), Some(*simulation_days), None, None)
        }
        Mode::When {
            start_date,
            target_items,
        } => (
            "when".to_string(),
            None,
            Some(*target_items),
            Some(format_date(*start_date)),
        ),
    };

    let (distribution, curve, confidences) = match &result.distribution {
        ForecastDistribution::HowMany { frequencies, curve } => (
            frequency_rows(frequencies, |outcome| outcome.to_string()),
            curve_rows(curve, |outcome| outcome.to_string()),
            confidence_points(curve, |outcome| outcome.to_string()),
        ),
        ForecastDistribution::When { frequencies, curve } => (
            frequency_rows(frequencies, format_date),
            curve_rows(curve, format_date),
            confidence_points(curve, format_date),
        ),
    };
    let [c50, c85, c95] = confidences;

    ForecastOutput {
        report: ForecastReport {
            data_source: data_source.to_string(),
            mode,
            iterations: request.iterations,
            lookback_days: request.lookback_days,
            window_days,
            simulation_days,
            target_items,
            start_date,
            c50,
            c85,
            c95,
        },
        distribution,
        curve,
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn frequency_rows<T: Copy>(
    frequencies: &[FrequencyEntry<T>],
    format: impl Fn(T) -> String,
) -> Vec<DistributionRow> {
    frequencies
        .iter()
        .map(|entry| DistributionRow {
            outcome: format(entry.outcome),
            frequency: entry.frequency,
        })
        .collect()
}

fn curve_rows<T: Copy>(curve: &[CurvePoint<T>], format: impl Fn(T) -> String) -> Vec<CurveRow> {
    curve
        .iter()
        .map(|point| CurveRow {
            outcome: format(point.outcome),
            frequency: point.frequency,
            probability: point.probability,
        })
        .collect()
}

fn confidence_points<T: Copy>(
    curve: &[CurvePoint<T>],
    format: impl Fn(T) -> String,
) -> [ConfidencePoint; 3] {
    CONFIDENCE_LEVELS.map(|level| ConfidencePoint {
        probability: level,
        outcome: outcome_at_confidence(curve, level)
            .map(&format)
            .unwrap_or_default(),
    })
}
