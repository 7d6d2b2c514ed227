//! Error types for sobjects-rest.
//!
//! The REST layer shares the transport crate's error taxonomy so callers
//! match on a single set of kinds.

pub use sobjects_client::{Error, ErrorKind, Result};
