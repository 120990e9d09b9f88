use serde::{Deserialize, Serialize};

/// Junction record binding one tag to one domain.
///
/// Identified, for lookup purposes, by the `(tag_id, domain_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainList {
    pub id: i64,
    #[serde(rename = "global_tag")]
    pub tag_id: i64,
    #[serde(rename = "payload_type")]
    pub domain_id: i64,
}

impl DomainList {
    #[must_use]
    pub const fn binds(&self, tag_id: i64, domain_id: i64) -> bool {
        self.tag_id == tag_id && self.domain_id == domain_id
    }
}
