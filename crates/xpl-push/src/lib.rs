//! # xpl-push
//!
//! Idempotent upsert of the four-level chain Tag → Domain → DomainList →
//! Payload against a store that only offers list and create.
//!
//! Each stage lists the whole collection, searches it from the end, and
//! creates the record only when no match exists. Repeating an identical push
//! therefore issues no writes.
//!
//! ## Known limits
//!
//! - There is no cross-process exclusion. Two pushes racing on the same
//!   names can both miss and both create; later lookups then pick whichever
//!   duplicate is listed last.
//! - Nothing is rolled back. A failure at a later stage leaves the records
//!   created by earlier stages in place.

mod error;
mod reconcile;
mod store;

pub use error::PushError;
pub use reconcile::{Reconciler, last_match};
pub use store::CalibrationStore;
