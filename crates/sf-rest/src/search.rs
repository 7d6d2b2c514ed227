//! SOSL search and recently viewed results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One record returned by a search or by the recent items endpoint.
///
/// Two entries are equal when every parsed field is equal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub attributes: RecordAttributes,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Every other field returned for the record.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The `attributes` block identifying a record's type and location.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecordAttributes {
    #[serde(rename = "type")]
    pub sobject_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SearchResult {
    /// Parse a search or recent body into entries without duplicates.
    ///
    /// Accepts the bare array returned by older API versions and the
    /// `{"searchRecords": [...]}` envelope. First-seen order is kept.
    pub fn parse_unique(json: &str) -> Result<Vec<SearchResult>> {
        let value: Value = serde_json::from_str(json)?;
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut envelope) => match envelope.remove("searchRecords") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(Error::parse(
                        "search response has no searchRecords array",
                    ))
                }
            },
            _ => return Err(Error::parse("search response is not an array")),
        };

        // Linear scan per entry: SearchResult holds a JSON map and is not Hash.
        // Quadratic, but SOSL pages are capped at a few thousand entries.
        let mut results: Vec<SearchResult> = Vec::with_capacity(entries.len());
        for entry in entries {
            let result: SearchResult = serde_json::from_value(entry)?;
            if !results.contains(&result) {
                results.push(result);
            }
        }
        Ok(results)
    }
}
