//! Fully buffered HTTP responses.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// An HTTP response whose body has already been read in full.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl Response {
    /// Build a response from its parts.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// The response body.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the body.
    pub fn into_text(self) -> String {
        self.body
    }

    /// Returns true if the body is empty or whitespace (e.g. `204 No Content`).
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Convert statuses >= 400 into [`ErrorKind::RemoteApi`].
    ///
    /// The body is passed through untouched, never parsed.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status >= 400 {
            return Err(Error::new(ErrorKind::RemoteApi {
                status: self.status,
                body: self.body,
            }));
        }
        Ok(self)
    }
}
