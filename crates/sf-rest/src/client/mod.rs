//! Salesforce sobjects REST API client.
//!
//! This client wraps `SalesforceClient` from `sobjects-client` and provides
//! one typed method per REST operation: describe, CRUD, query, search and
//! recent items.

use sobjects_client::{ClientConfig, ConnectionConfig, SalesforceClient};

use crate::error::{Error, Result};

mod crud;
mod describe;
mod query;
mod search;

/// Salesforce sobjects REST API client.
///
/// Every operation issues exactly one HTTP request and waits for the whole
/// response. Nothing is retried or cached, and query results are not
/// paginated. Clones share the connection pool and the session token.
///
/// # Example
///
/// ```rust,ignore
/// use sobjects_rest::{SObject, SObjectRestClient};
///
/// let client = SObjectRestClient::new(session_token, "na1.salesforce.com")?;
///
/// let mut account = SObject::new("Account")?;
/// account.set_string("Name", "Acme");
/// let created = client.create(&account).await?;
///
/// let accounts = client.query("SELECT Id, Name FROM Account").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SObjectRestClient {
    client: SalesforceClient,
}

impl SObjectRestClient {
    /// Create a client for `hostname` using the default API version.
    pub fn new(session_token: impl Into<String>, hostname: impl Into<String>) -> Result<Self> {
        Self::from_config(ConnectionConfig::new(session_token, hostname))
    }

    /// Create a client pinned to a specific API version (at least 22.0).
    pub fn with_api_version(
        session_token: impl Into<String>,
        hostname: impl Into<String>,
        api_version: f64,
    ) -> Result<Self> {
        Self::from_config(ConnectionConfig::new(session_token, hostname).with_api_version(api_version))
    }

    /// Create a client from connection settings.
    pub fn from_config(connection: ConnectionConfig) -> Result<Self> {
        Ok(Self {
            client: SalesforceClient::connect(connection)?,
        })
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(connection: ConnectionConfig, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: SalesforceClient::with_config(connection, config)?,
        })
    }

    /// Create a client from an existing SalesforceClient.
    pub fn from_client(client: SalesforceClient) -> Self {
        Self { client }
    }

    /// Get the underlying SalesforceClient.
    pub fn inner(&self) -> &SalesforceClient {
        &self.client
    }

    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    pub fn api_version(&self) -> f64 {
        self.client.api_version()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn session_token(&self) -> String {
        self.client.session_token()
    }

    /// Replace the session token used by subsequent requests.
    pub fn set_session_token(&self, token: impl Into<String>) -> Result<()> {
        self.client.set_session_token(token)
    }
}

/// Join path segments under `sobjects/`, percent-encoding each one.
///
/// The result always ends in `/`, e.g. `sobjects/Account/001xx/`.
pub(crate) fn sobject_path(segments: &[(&str, &str)]) -> Result<String> {
    let mut path = String::from("sobjects/");
    for (what, segment) in segments {
        if segment.trim().is_empty() {
            return Err(Error::invalid_argument(format!("{what} must not be empty")));
        }
        path.push_str(&urlencoding::encode(segment));
        path.push('/');
    }
    Ok(path)
}
