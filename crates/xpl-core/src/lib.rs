//! # xpl-core
//!
//! Core types shared across all xpload crates:
//! - Record structs for the remote calibration store (tags, domains, domain
//!   lists, payload intervals) and the generic [`entities::Entry`]
//! - Collection and write-endpoint enums with their wire names
//! - Cross-cutting error types
//! - CLI response types (push report)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
