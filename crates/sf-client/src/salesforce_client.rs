//! Authenticated Salesforce client.
//!
//! `SalesforceClient` combines the connection settings with an HTTP client,
//! builds REST API URLs and injects the standard request headers.
//!
//! ## Security
//!
//! - The session token is redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::connection::{validate_session_token, ConnectionConfig};
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::Response;

const CHARSET_HEADER: &str = "Accept-Charset";
const CHARSET_VALUE: &str = "UTF-8";
const CONTENT_HEADER: &str = "Content-Type";
const CONTENT_VALUE: &str = "application/json";
const PRETTY_HEADER: &str = "X-PrettyPrint";
const PRETTY_VALUE: &str = "1";

/// Salesforce API client holding the connection settings.
///
/// Hostname and API version are fixed for the client's lifetime. The session
/// token can be replaced with [`set_session_token`](Self::set_session_token);
/// clones share the same token.
///
/// # Example
///
/// ```rust,ignore
/// use sobjects_client::{ConnectionConfig, SalesforceClient};
///
/// let client = SalesforceClient::connect(
///     ConnectionConfig::new(session_token, "na1.salesforce.com"),
/// )?;
///
/// let limits: serde_json::Value = client.get_json(&client.rest_url("limits/")).await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    api_version: f64,
    base_url: String,
    session_token: Arc<RwLock<String>>,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("base_url", &self.base_url)
            .field("session_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a client from connection settings with the default transport.
    pub fn connect(connection: ConnectionConfig) -> Result<Self> {
        Self::with_config(connection, ClientConfig::default())
    }

    /// Create a client with custom transport configuration.
    ///
    /// Fails with `InvalidArgument` before any network activity when the
    /// settings are invalid.
    pub fn with_config(connection: ConnectionConfig, config: ClientConfig) -> Result<Self> {
        connection.validate()?;

        let instance_url = connection.instance_url();
        let base_url = format!(
            "{}/services/data/v{}/",
            instance_url,
            connection.version_string()
        );
        url::Url::parse(&base_url)?;

        let http = SfHttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url,
            api_version: connection.api_version,
            base_url,
            session_token: Arc::new(RwLock::new(connection.session_token)),
        })
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> f64 {
        self.api_version
    }

    /// Base URL of the REST API, e.g. `https://na1.salesforce.com/services/data/v24.0/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session token.
    pub fn session_token(&self) -> String {
        match self.session_token.read() {
            Ok(token) => token.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the session token, e.g. after it expired and was renewed.
    ///
    /// Requests already built keep the token they were built with.
    pub fn set_session_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        validate_session_token(&token)?;
        match self.session_token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
        Ok(())
    }

    /// Build the REST API URL for a path relative to the base URL.
    ///
    /// Example: `rest_url("sobjects/Account/")` -> `.../services/data/v24.0/sobjects/Account/`
    pub fn rest_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    // =========================================================================
    // Base HTTP Methods (with authentication)
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.delete(url))
    }

    /// Reads the token once and attaches the four standard headers.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.session_token())
            .header(CHARSET_HEADER, CHARSET_VALUE)
            .header(CONTENT_HEADER, CONTENT_VALUE)
            .header(PRETTY_HEADER, PRETTY_VALUE)
    }

    /// Execute a request and return the buffered response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.execute(self.get(url)).await?;
        response.json()
    }

    /// POST a JSON text body and return the buffered response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_text(&self, url: &str, body: String) -> Result<Response> {
        self.execute(self.post(url).json_text(body)).await
    }

    /// DELETE request returning the buffered response.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_request(&self, url: &str) -> Result<Response> {
        self.execute(self.delete(url)).await
    }
}
