//! # sobjects-client
//!
//! Core HTTP client infrastructure for the Salesforce sobjects REST API.
//!
//! This crate provides:
//! - Connection settings validation (session token, hostname, API version)
//! - Standard header injection (bearer token, charset, JSON, pretty print)
//! - A single-shot transport that buffers the whole response body
//! - HTTP-status-to-error mapping with the raw body preserved
//! - Request/response tracing
//!
//! There is no retry, caching or pagination in this layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sobjects-rest)                                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Holds connection settings + HTTP client                  │
//! │  - Builds REST URLs, injects headers                        │
//! │  - Replaceable session token                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - One request, fully buffered response                     │
//! │  - Status >= 400 -> RemoteApi error                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sobjects_client::{ConnectionConfig, SalesforceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sobjects_client::Error> {
//!     let client = SalesforceClient::connect(ConnectionConfig::from_env()?)?;
//!
//!     let describe: serde_json::Value = client
//!         .get_json(&client.rest_url("sobjects/"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod connection;
mod error;
mod request;
mod response;
mod salesforce_client;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use connection::{
    validate_session_token, ConnectionConfig, DEFAULT_API_VERSION, MIN_API_VERSION,
    MIN_SESSION_TOKEN_LEN,
};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;
pub use salesforce_client::SalesforceClient;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sobjects-api/", env!("CARGO_PKG_VERSION"));
