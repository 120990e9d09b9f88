//! Collection, write-endpoint, and read-policy enums for the remote calibration store.
//!
//! `Component` and `WriteEndpoint` carry their REST path segment via `endpoint()`. Parsing from a
//! string goes through [`FromStr`], which is the only place an unknown name
//! can enter the system; it is rejected there before any request is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A readable collection on the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Tags,
    Domains,
    DomainLists,
    Payloads,
}

impl Component {
    pub const ALL: [Self; 4] = [Self::Tags, Self::Domains, Self::DomainLists, Self::Payloads];

    /// Path segment of the collection endpoint (`gt`, `pt`, `pl`, `piov`).
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Tags => "gt",
            Self::Domains => "pt",
            Self::DomainLists => "pl",
            Self::Payloads => "piov",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Domains => "domains",
            Self::DomainLists => "domain_lists",
            Self::Payloads => "payloads",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|component| component.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidComponent(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// WriteEndpoint
// ---------------------------------------------------------------------------

/// The fixed allow-list of endpoints that accept a POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteEndpoint {
    TagType,
    TagStatus,
    Tag,
    Domain,
    DomainList,
    Payload,
}

impl WriteEndpoint {
    pub const ALL: [Self; 6] = [
        Self::TagType,
        Self::TagStatus,
        Self::Tag,
        Self::Domain,
        Self::DomainList,
        Self::Payload,
    ];

    /// Path segment of the endpoint (`gttype`, `gtstatus`, `gt`, `pt`, `pl`, `piov`).
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::TagType => "gttype",
            Self::TagStatus => "gtstatus",
            Self::Tag => "gt",
            Self::Domain => "pt",
            Self::DomainList => "pl",
            Self::Payload => "piov",
        }
    }

    /// Human-readable operation name, used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TagType => "tag-type-create",
            Self::TagStatus => "tag-status-create",
            Self::Tag => "tag-create",
            Self::Domain => "domain-create",
            Self::DomainList => "domain-list-create",
            Self::Payload => "payload-create",
        }
    }
}

impl fmt::Display for WriteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the wire segment (`gt`) or the operation name (`tag-create`).
impl FromStr for WriteEndpoint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.endpoint() == s || endpoint.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEndpoint(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ReadFailurePolicy
// ---------------------------------------------------------------------------

/// What a push does when a collection read fails.
///
/// A failed read cannot be told apart from an empty collection unless the
/// error is kept. `Abort` keeps it and stops the push; `TreatAsEmpty` logs it
/// and carries on as if nothing existed yet, which may create duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadFailurePolicy {
    #[default]
    Abort,
    TreatAsEmpty,
}

impl ReadFailurePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::TreatAsEmpty => "treat-as-empty",
        }
    }
}

impl fmt::Display for ReadFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_endpoints() {
        assert_eq!(Component::Tags.endpoint(), "gt");
        assert_eq!(Component::Domains.endpoint(), "pt");
        assert_eq!(Component::DomainLists.endpoint(), "pl");
        assert_eq!(Component::Payloads.endpoint(), "piov");
    }

    #[test]
    fn component_parses_hyphenated_alias() {
        assert_eq!("domain-lists".parse::<Component>().unwrap(), Component::DomainLists);
        assert_eq!("payloads".parse::<Component>().unwrap(), Component::Payloads);
    }

    #[test]
    fn component_rejects_unknown_name() {
        let err = "widgets".parse::<Component>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidComponent(ref name) if name == "widgets"));
    }

    #[test]
    fn write_endpoint_accepts_wire_and_operation_names() {
        assert_eq!("gttype".parse::<WriteEndpoint>().unwrap(), WriteEndpoint::TagType);
        assert_eq!(
            "domain-list-create".parse::<WriteEndpoint>().unwrap(),
            WriteEndpoint::DomainList
        );
        for endpoint in WriteEndpoint::ALL {
            assert_eq!(endpoint.endpoint().parse::<WriteEndpoint>().unwrap(), endpoint);
        }
    }

    #[test]
    fn read_failure_policy_defaults_to_abort() {
        assert_eq!(ReadFailurePolicy::default(), ReadFailurePolicy::Abort);
        let parsed: ReadFailurePolicy = serde_json::from_str("\"treat-as-empty\"").unwrap();
        assert_eq!(parsed, ReadFailurePolicy::TreatAsEmpty);
    }

    #[test]
    fn write_endpoint_rejects_read_only_collection() {
        let err = "payloadiovs".parse::<WriteEndpoint>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEndpoint(_)));
    }
}
