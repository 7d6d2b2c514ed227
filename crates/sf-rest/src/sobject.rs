//! Results of create, update and delete operations.

use serde::{Deserialize, Serialize};

/// Outcome of a create, update or delete.
///
/// Create answers with a body such as
/// `{"id":"001D000000IqhSLIAZ","errors":[],"success":true}`. Update and delete
/// answer `204 No Content`; the client then reports success with the id of the
/// affected record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MutationResult {
    /// Id assigned on create, or the id of the updated/deleted record.
    #[serde(default)]
    pub id: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<MutationError>,
}

impl MutationResult {
    /// Successful result for a body-less response.
    pub fn succeeded(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            success: true,
            errors: Vec::new(),
        }
    }

    /// Error messages reported by the API.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// An error entry in a mutation result.
///
/// Older API versions report bare message strings; newer ones report
/// `{"statusCode": ..., "message": ..., "fields": [...]}`. Both decode here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawMutationError")]
pub struct MutationError {
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMutationError {
    Message(String),
    Detailed {
        #[serde(rename = "statusCode", alias = "errorCode", default)]
        status_code: Option<String>,
        message: String,
        #[serde(default)]
        fields: Vec<String>,
    },
}

impl From<RawMutationError> for MutationError {
    fn from(raw: RawMutationError) -> Self {
        match raw {
            RawMutationError::Message(message) => Self {
                status_code: None,
                message,
                fields: Vec::new(),
            },
            RawMutationError::Detailed {
                status_code,
                message,
                fields,
            } => Self {
                status_code,
                message,
                fields,
            },
        }
    }
}
