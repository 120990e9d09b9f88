use serde::{Deserialize, Serialize};

use super::lenient;

/// A named, versioned grouping of payload references.
///
/// Only `id` and `name` identify a tag. The classifier references are kept
/// when they are numeric and dropped otherwise; some stores return them as
/// names (`"status": "unlocked"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_id: Option<i64>,
    #[serde(
        rename = "status",
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_id: Option<i64>,
}

/// Tag type classifier. Created alongside every new tag and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagType {
    pub id: i64,
    pub name: String,
}

/// Tag status classifier. Created alongside every new tag and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagStatus {
    pub id: i64,
    pub name: String,
}
