use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyThroughput {
    pub date: NaiveDate,
    pub completed_items: usize,
}
