//! # xpl-schema
//!
//! Structural contracts for responses from the remote calibration store.
//!
//! Every response is checked before any id is extracted from it. The general
//! contract is an *entry*: an object with a required integer `id` and an
//! optional string `name`. Reads must produce an array of entries (a single
//! object is wrapped by the caller first); writes must produce one entry.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{ENTRY, ENTRY_LIST, SchemaRegistry};
