use serde::{Deserialize, Serialize};

use super::lenient;

/// An artifact reference scoped to a domain list and an interval start.
///
/// Identified, for lookup purposes, by `(url, domain_list_id)` only. The
/// interval values do not take part in the identity check, and decode as
/// `None` when missing, null, or not a non-negative integer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    pub id: i64,
    #[serde(rename = "payload_url")]
    pub url: String,
    #[serde(rename = "payload_list")]
    pub domain_list_id: i64,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub major_iov: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub minor_iov: Option<u64>,
}

impl Payload {
    /// Whether this record is the same payload as `url` under `domain_list_id`.
    #[must_use]
    pub fn matches(&self, url: &str, domain_list_id: i64) -> bool {
        self.url == url && self.domain_list_id == domain_list_id
    }
}
