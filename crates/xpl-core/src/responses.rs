//! CLI response types returned as JSON by `xpload` commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four find-or-create stages of a push, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Tag,
    Domain,
    DomainList,
    Payload,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Domain => "domain",
            Self::DomainList => "domain_list",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a stage reused an existing record or appended a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Found,
    Created,
}

/// The id a stage settled on and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: i64,
    pub outcome: Outcome,
}

impl Resolution {
    #[must_use]
    pub const fn found(id: i64) -> Self {
        Self {
            id,
            outcome: Outcome::Found,
        }
    }

    #[must_use]
    pub const fn created(id: i64) -> Self {
        Self {
            id,
            outcome: Outcome::Created,
        }
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        self.outcome == Outcome::Created
    }
}

/// Response from `xpload push`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushReport {
    pub tag: Resolution,
    pub domain: Resolution,
    pub domain_list: Resolution,
    pub payload: Resolution,
}

impl PushReport {
    /// Number of stages that appended a record. Zero for a repeated push.
    #[must_use]
    pub fn created_count(&self) -> usize {
        [self.tag, self.domain, self.domain_list, self.payload]
            .iter()
            .filter(|resolution| resolution.is_created())
            .count()
    }
}
