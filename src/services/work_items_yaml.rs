use std::io::{self, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::work_item::{WorkItemRecord, WorkItemType};

#[derive(Serialize, Deserialize)]
struct WorkItemYamlRecord {
    closed_date: String,
    closed_by: String,
    work_item_type: String,
}

#[derive(Error, Debug)]
pub enum WorkItemsYamlError {
    #[error("failed to parse work item yaml: {0}")]
    Parse(String),
    #[error("invalid closed date: {0}")]
    InvalidDate(String),
}

pub fn serialize_work_items_to_yaml<W: Write>(
    writer: &mut W,
    records: &[WorkItemRecord],
) -> io::Result<()> {
    let rows: Vec<WorkItemYamlRecord> = records
        .iter()
        .map(|record| WorkItemYamlRecord {
            closed_date: record.closed_date.format("%Y-%m-%d").to_string(),
            closed_by: record.closed_by.clone(),
            work_item_type: record.work_item_type.name().to_string(),
        })
        .collect();

    let yaml = serde_yaml::to_string(&rows)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

pub fn deserialize_work_items_from_yaml_str(
    contents: &str,
) -> Result<Vec<WorkItemRecord>, WorkItemsYamlError> {
    let rows: Vec<WorkItemYamlRecord> = serde_yaml::from_str(contents)
        .map_err(|err| WorkItemsYamlError::Parse(err.to_string()))?;

    rows.into_iter()
        .map(|row| {
            let closed_date = NaiveDate::parse_from_str(&row.closed_date, "%Y-%m-%d")
                .map_err(|_| WorkItemsYamlError::InvalidDate(row.closed_date.clone()))?;
            Ok(WorkItemRecord {
                closed_date,
                closed_by: row.closed_by,
                work_item_type: WorkItemType::parse(&row.work_item_type),
            })
        })
        .collect()
}
