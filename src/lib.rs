//! # sobjects-api
//!
//! A Salesforce sobjects REST API client library for Rust.
//!
//! Records are handled dynamically: an [`SObject`] is a type name plus a map
//! of scalar field values. Each client operation issues exactly one HTTP
//! request and returns a typed result or an [`Error`].
//!
//! ## Security
//!
//! - The session token is redacted in Debug output
//! - Tracing spans skip the token and request bodies
//!
//! ## Crates
//!
//! - **sobjects-client** - Connection settings, header injection, transport and errors
//! - **sobjects-rest** - Describe, CRUD, Query, Search and Recent operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sobjects_api::{ConnectionConfig, SObjectRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SF_SESSION_TOKEN, SF_HOSTNAME and optionally SF_API_VERSION
//!     let client = SObjectRestClient::from_config(ConnectionConfig::from_env()?)?;
//!
//!     let accounts = client
//!         .query("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     for account in &accounts.records {
//!         println!("{:?}", account.get_field("Name"));
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use sobjects_client as client;
pub use sobjects_rest as rest;

// Re-export commonly used types at the top level
pub use sobjects_client::{ClientConfig, ConnectionConfig, SalesforceClient};
pub use sobjects_rest::{
    Error, ErrorKind, FieldValue, MutationResult, QueryResult, Result, SObject,
    SObjectRestClient, SearchResult,
};
