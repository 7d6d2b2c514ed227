//! Error types for sobjects-client.
//!
//! Every failure surfaces to the caller as one of four kinds. Nothing is
//! retried or swallowed; a [`ErrorKind::RemoteApi`] carries the status and the
//! literal response body so the caller can diagnose it without a log.

/// Result type alias for sobjects-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sobjects-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Shorthand for an [`ErrorKind::Parse`] error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse(message.into()))
    }

    /// Returns true if a call was rejected before any request was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if a response body could not be decoded.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }

    /// Returns true if the server answered with a status >= 400.
    pub fn is_remote_api(&self) -> bool {
        matches!(self.kind, ErrorKind::RemoteApi { .. })
    }

    /// Returns true if the HTTP transport itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// HTTP status of a remote API error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a remote API error.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::RemoteApi { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Malformed construction parameter, path segment or query syntax.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Response body is not valid JSON or lacks the expected structure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The API answered with an HTTP status >= 400.
    #[error("Salesforce API error: HTTP {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// Failure reported by the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Parse(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(
            ErrorKind::InvalidArgument(format!("Invalid URL: {}", err)),
            err,
        )
    }
}
