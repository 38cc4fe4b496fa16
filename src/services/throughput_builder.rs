use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::throughput::DailyThroughput;
use crate::domain::work_item::{WorkItemRecord, WorkItemType};
use crate::services::simulation::ForecastError;

/// Builds a dense daily throughput series from closed work item records.
///
/// Only records closed by one of `selected_members` contribute. Every
/// calendar day between the first and last matching close date gets a row;
/// days without completions get a zero count. Only stories are counted —
/// bugs still widen the date range but never the counts (deliberate policy,
/// see DESIGN.md).
pub fn build_throughput(
    records: &[WorkItemRecord],
    selected_members: &[String],
) -> Result<Vec<DailyThroughput>, ForecastError> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        if !selected_members.contains(&record.closed_by) {
            continue;
        }
        let completed = counts.entry(record.closed_date).or_insert(0);
        if record.work_item_type == WorkItemType::Story {
            *completed += 1;
        }
    }

    let first = *counts.keys().next().ok_or(ForecastError::EmptyInput)?;
    let last = *counts.keys().next_back().ok_or(ForecastError::EmptyInput)?;

    let mut series = Vec::new();
    let mut date = first;
    while date <= last {
        series.push(DailyThroughput {
            date,
            completed_items: counts.get(&date).copied().unwrap_or(0),
        });
        date = date.succ_opt().unwrap();
    }
    Ok(series)
}

/// Distinct names that closed at least one record, sorted.
pub fn member_roster(records: &[WorkItemRecord]) -> Vec<String> {
    let mut members: Vec<String> = records
        .iter()
        .map(|record| record.closed_by.clone())
        .collect();
    members.sort();
    members.dedup();
    members
}

/// Sums a daily series into weekly totals, each week labeled by the Monday
/// that closes it.
pub fn weekly_throughput(series: &[DailyThroughput]) -> Vec<DailyThroughput> {
    let mut weeks: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for day in series {
        let days_to_monday = (7 - day.date.weekday().num_days_from_monday() as i64) % 7;
        let label = day.date + Duration::days(days_to_monday);
        *weeks.entry(label).or_insert(0) += day.completed_items;
    }
    weeks
        .into_iter()
        .map(|(date, completed_items)| DailyThroughput {
            date,
            completed_items,
        })
        .collect()
}
