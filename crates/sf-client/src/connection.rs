//! Connection settings: session token, hostname and API version.

use crate::error::{Error, Result};

/// API version used when none is given.
pub const DEFAULT_API_VERSION: f64 = 24.0;

/// Oldest API version the sobjects endpoints are supported on.
pub const MIN_API_VERSION: f64 = 22.0;

/// Shortest session token accepted.
pub const MIN_SESSION_TOKEN_LEN: usize = 20;

/// The three named options a client is constructed from.
///
/// ## Security
///
/// The session token is redacted in Debug output.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Session token sent as a bearer credential, e.g. `00D...!AQ...`.
    pub session_token: String,
    /// Hostname like `na1.salesforce.com`, or a full origin such as
    /// `https://myorg.my.salesforce.com`.
    pub hostname: String,
    /// API version like `24.0`.
    pub api_version: f64,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("session_token", &"[REDACTED]")
            .field("hostname", &self.hostname)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ConnectionConfig {
    /// Settings for the given token and host at [`DEFAULT_API_VERSION`].
    pub fn new(session_token: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            hostname: hostname.into(),
            api_version: DEFAULT_API_VERSION,
        }
    }

    /// Set the API version.
    pub fn with_api_version(mut self, api_version: f64) -> Self {
        self.api_version = api_version;
        self
    }

    /// Load settings from environment variables.
    ///
    /// Reads `SF_SESSION_TOKEN` and `SF_HOSTNAME` (or `SALESFORCE_SESSION_TOKEN`
    /// and `SALESFORCE_HOSTNAME`), and optionally `SF_API_VERSION`.
    pub fn from_env() -> Result<Self> {
        let session_token = env_var("SF_SESSION_TOKEN", "SALESFORCE_SESSION_TOKEN")?;
        let hostname = env_var("SF_HOSTNAME", "SALESFORCE_HOSTNAME")?;

        let api_version = match env_var("SF_API_VERSION", "SALESFORCE_API_VERSION") {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|_| {
                Error::invalid_argument(format!("SF_API_VERSION is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_API_VERSION,
        };

        Ok(Self::new(session_token, hostname).with_api_version(api_version))
    }

    /// Check every construction rule without touching the network.
    pub fn validate(&self) -> Result<()> {
        validate_session_token(&self.session_token)?;
        if self.hostname.trim().is_empty() {
            return Err(Error::invalid_argument(
                "Provide a hostname like na1.salesforce.com",
            ));
        }
        if !self.api_version.is_finite() || self.api_version < MIN_API_VERSION {
            return Err(Error::invalid_argument(format!(
                "Provide an API version {MIN_API_VERSION:.1} or higher, got {}",
                self.api_version
            )));
        }
        Ok(())
    }

    /// Origin of the org, `https://` prefixed when the hostname has no scheme.
    pub fn instance_url(&self) -> String {
        let host = self.hostname.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// API version rendered the way it appears in URLs, e.g. `24.0` or `24.25`.
    ///
    /// Whole versions keep one decimal; anything else prints every digit.
    pub fn version_string(&self) -> String {
        if self.api_version.fract() == 0.0 {
            format!("{:.1}", self.api_version)
        } else {
            self.api_version.to_string()
        }
    }
}

/// Reject empty or too-short session tokens.
pub fn validate_session_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::invalid_argument("Provide a session token"));
    }
    if token.chars().count() < MIN_SESSION_TOKEN_LEN {
        return Err(Error::invalid_argument(format!(
            "Session token must be at least {MIN_SESSION_TOKEN_LEN} characters"
        )));
    }
    Ok(())
}

fn env_var(primary: &str, fallback: &str) -> Result<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .map_err(|_| Error::invalid_argument(format!("Environment variable not set: {primary}")))
}
