//! # sobjects-rest
//!
//! Salesforce sobjects REST API client: describe, CRUD, query and search.
//!
//! ## Features
//!
//! - **Describe** - Org-wide sobject list, per-type metadata and field layout
//! - **SObject CRUD** - Get, create, update and delete single records
//! - **SOQL Query** - First page of results with the continuation URL
//! - **SOSL Search** - Full-text search and recently viewed records, deduplicated
//!
//! Records are dynamic: an [`SObject`] is a type name plus a map of scalar
//! field values, so no per-type structs are needed.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sobjects_rest::{SObject, SObjectRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sobjects_rest::Error> {
//!     let client = SObjectRestClient::new(
//!         "00Dxx0000001gEF!AQcAQH3k9s7LKbp",
//!         "na1.salesforce.com",
//!     )?;
//!
//!     // Create
//!     let mut account = SObject::new("Account")?;
//!     account.set_string("Name", "New Account");
//!     let created = client.create(&account).await?;
//!
//!     // Update
//!     if let Some(id) = created.id {
//!         account.set_string("Id", id.clone());
//!         account.set_string("Name", "Updated");
//!         client.update(&account).await?;
//!
//!         // Delete
//!         client.delete("Account", &id).await?;
//!     }
//!
//!     // Query
//!     let accounts = client.query("SELECT Id, Name FROM Account LIMIT 10").await?;
//!     for record in &accounts.records {
//!         println!("{:?}", record.get_field("Name"));
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod query;
mod record;
mod search;
mod sobject;

pub use client::SObjectRestClient;
pub use describe::{
    ChildRelationship, DescribeGlobal, DescribeLayout, DescribeSObject, FieldDescribe,
    PicklistValue, RecordTypeInfo, SObjectSummary,
};
pub use error::{Error, ErrorKind, Result};
pub use query::QueryResult;
pub use record::{FieldValue, SObject, ID_FIELD};
pub use search::{RecordAttributes, SearchResult};
pub use sobject::{MutationError, MutationResult};

pub use sobjects_client::{ClientConfig, ConnectionConfig, DEFAULT_API_VERSION};
