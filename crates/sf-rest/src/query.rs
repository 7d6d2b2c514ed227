//! SOQL query results.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::SObject;

/// First page of a SOQL query.
///
/// Only the page returned by the query call is held; `next_records_url` is
/// kept for callers that want to continue themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Total number of records matching the query.
    pub total_size: u64,
    /// Whether all records are returned (no more pages).
    pub done: bool,
    /// Path to fetch the next batch of results.
    pub next_records_url: Option<String>,
    /// The records, in the order returned.
    pub records: Vec<SObject>,
}

#[derive(Debug, Deserialize)]
struct RawQueryResult {
    #[serde(rename = "totalSize")]
    total_size: u64,
    done: bool,
    #[serde(rename = "nextRecordsUrl")]
    next_records_url: Option<String>,
    #[serde(default)]
    records: Vec<Value>,
}

impl QueryResult {
    /// Parse a query response body.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawQueryResult = serde_json::from_str(json)?;
        let records = raw
            .records
            .into_iter()
            .map(|record| match record {
                Value::Object(map) => SObject::from_attributed(map),
                _ => Err(Error::parse("query record is not a JSON object")),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total_size: raw.total_size,
            done: raw.done,
            next_records_url: raw.next_records_url,
            records,
        })
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
