use std::env;
use std::fs;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::work_item::{WorkItemRecord, WorkItemType};

const API_VERSION: &str = "6.0";
const WORK_ITEM_BATCH_SIZE: usize = 200;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const CLOSED_BY_FIELD: &str = "Microsoft.VSTS.Common.ClosedBy";
const CLOSED_DATE_FIELD: &str = "Microsoft.VSTS.Common.ClosedDate";
const WORK_ITEM_TYPE_FIELD: &str = "System.WorkItemType";

#[derive(Error, Debug)]
pub enum AdoApiError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdoConfig {
    pub organization_url: String,
    #[serde(default = "default_query")]
    pub query: String,
}

fn default_query() -> String {
    "Select [System.Id] From WorkItems Where [System.WorkItemType] in ('User Story','Bug') AND [State] = 'Closed'"
        .to_string()
}

impl AdoConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, AdoApiError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| AdoApiError::Other(format!("failed to read config: {err}")))?;
        let config: AdoConfig =
            serde_yaml::from_str(&contents).map_err(|_| AdoApiError::Parse)?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct AuthData {
    pub access_token: String,
}

impl AuthData {
    pub fn from_env() -> Result<Self, AdoApiError> {
        match env::var("ADO_ACCESS_TOKEN") {
            Ok(access_token) if !access_token.is_empty() => Ok(Self { access_token }),
            _ => Err(AdoApiError::Unauthorized),
        }
    }
}

/// Describes an interface for retrieving closed work item records.
pub trait WorkItemSource {
    fn closed_work_items(&self) -> Result<Vec<WorkItemRecord>, AdoApiError>;
}

pub struct AdoApiClient {
    config: AdoConfig,
    auth: AuthData,
    client: Client,
}

impl AdoApiClient {
    pub fn new(config: AdoConfig, auth: AuthData) -> Result<Self, AdoApiError> {
        if config.organization_url.is_empty() {
            return Err(AdoApiError::Other(
                "ado config is missing organization_url".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AdoApiError::Other(err.to_string()))?;

        Ok(Self {
            config,
            auth,
            client,
        })
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<Value, AdoApiError> {
        let response = self
            .client
            .post(url)
            // A PAT goes into HTTP basic auth with an empty user name.
            .basic_auth("", Some(self.auth.access_token.clone()))
            .json(body)
            .send()
            .map_err(|_| AdoApiError::Connection)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AdoApiError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(AdoApiError::NotFound);
        }
        if !status.is_success() {
            return Err(AdoApiError::Connection);
        }

        response.json::<Value>().map_err(|_| AdoApiError::Parse)
    }

    fn query_work_item_ids(&self) -> Result<Vec<u64>, AdoApiError> {
        let url = format!(
            "{}/_apis/wit/wiql?api-version={API_VERSION}",
            self.config.organization_url
        );
        let payload = json!({ "query": self.config.query });

        let response = self.post_json(&url, &payload)?;
        let references = response
            .get("workItems")
            .and_then(|value| value.as_array())
            .ok_or(AdoApiError::Parse)?;

        references
            .iter()
            .map(|reference| {
                reference
                    .get("id")
                    .and_then(|value| value.as_u64())
                    .ok_or(AdoApiError::Parse)
            })
            .collect()
    }

    fn work_item_batch(&self, ids: &[u64]) -> Result<Vec<WorkItemRecord>, AdoApiError> {
        let url = format!(
            "{}/_apis/wit/workitemsbatch?api-version={API_VERSION}",
            self.config.organization_url
        );
        let payload = json!({
            "ids": ids,
            "fields": [
                "System.Id",
                CLOSED_BY_FIELD,
                CLOSED_DATE_FIELD,
                WORK_ITEM_TYPE_FIELD,
            ],
        });

        let response = self.post_json(&url, &payload)?;
        let work_items = response
            .get("value")
            .and_then(|value| value.as_array())
            .ok_or(AdoApiError::Parse)?;

        // Items missing a closed date or actor are dropped, not errored:
        // open items can match the query and carry no completion data.
        let mut records = Vec::new();
        for work_item in work_items {
            let fields = work_item
                .get("fields")
                .and_then(|value| value.as_object())
                .ok_or(AdoApiError::Parse)?;
            if let Some(record) = map_record(fields) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

impl WorkItemSource for AdoApiClient {
    fn closed_work_items(&self) -> Result<Vec<WorkItemRecord>, AdoApiError> {
        let ids = self.query_work_item_ids()?;
        let mut records = Vec::new();
        for batch in ids.chunks(WORK_ITEM_BATCH_SIZE) {
            records.extend(self.work_item_batch(batch)?);
        }
        Ok(records)
    }
}

fn map_record(fields: &serde_json::Map<String, Value>) -> Option<WorkItemRecord> {
    let closed_by = fields.get(CLOSED_BY_FIELD).and_then(closed_by_name)?;
    let closed_date = fields
        .get(CLOSED_DATE_FIELD)
        .and_then(|value| value.as_str())
        .and_then(parse_date)?;
    let work_item_type = fields
        .get(WORK_ITEM_TYPE_FIELD)
        .and_then(|value| value.as_str())?;

    Some(WorkItemRecord {
        closed_date,
        closed_by,
        work_item_type: WorkItemType::parse(work_item_type),
    })
}

fn closed_by_name(value: &Value) -> Option<String> {
    match value {
        Value::Object(identity) => identity
            .get("displayName")
            .and_then(|name| name.as_str())
            .map(|name| name.to_string()),
        Value::String(name) => Some(name.clone()),
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let date = if let Some((date_part, _)) = text.split_once('T') {
        date_part
    } else {
        text
    };
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
