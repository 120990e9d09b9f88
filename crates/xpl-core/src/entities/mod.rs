//! Record structs for the remote calibration store.
//!
//! Each struct maps to one REST collection (see [`crate::enums::Component`]).
//! Field names follow the wire format through `#[serde(rename)]`; unknown
//! fields returned by the server are ignored.

mod domain;
mod domain_list;
mod entry;
mod lenient;
mod payload;
mod tag;

pub use domain::Domain;
pub use domain_list::DomainList;
pub use entry::Entry;
pub use payload::Payload;
pub use tag::{Tag, TagStatus, TagType};
