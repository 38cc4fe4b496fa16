use chrono::NaiveDate;

use crate::domain::work_item::{WorkItemRecord, WorkItemType};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn closed_story(closed_by: &str, closed_date: NaiveDate) -> WorkItemRecord {
    WorkItemRecord {
        closed_date,
        closed_by: closed_by.to_string(),
        work_item_type: WorkItemType::Story,
    }
}

pub fn closed_bug(closed_by: &str, closed_date: NaiveDate) -> WorkItemRecord {
    WorkItemRecord {
        closed_date,
        closed_by: closed_by.to_string(),
        work_item_type: WorkItemType::Bug,
    }
}

/// One record per completed story, `counts[i]` stories on `start + i` days.
pub fn story_records_with_daily_counts(
    closed_by: &str,
    start: NaiveDate,
    counts: &[usize],
) -> Vec<WorkItemRecord> {
    let mut records = Vec::new();
    let mut date = start;
    for count in counts {
        for _ in 0..*count {
            records.push(closed_story(closed_by, date));
        }
        date = date.succ_opt().unwrap();
    }
    records
}
