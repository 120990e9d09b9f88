//! Remote store connection parameters.

use serde::{Deserialize, Deserializer, Serialize};
use xpl_core::enums::ReadFailurePolicy;

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DbConfig {
    /// Host name or address of the REST service.
    #[serde(default)]
    pub host: String,

    /// TCP port. Accepts a number or a numeric string (`"8080"`).
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: u16,

    /// API root path appended after `host:port` (e.g. `/api`). May be empty.
    #[serde(default)]
    pub apiroot: String,

    /// Local payload storage root. Carried through for tooling; not used to
    /// build request URLs.
    #[serde(default)]
    pub path: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How `push` reacts to a failed collection read.
    #[serde(default)]
    pub on_read_error: ReadFailurePolicy,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 0,
            apiroot: String::new(),
            path: String::new(),
            timeout_secs: default_timeout_secs(),
            on_read_error: ReadFailurePolicy::default(),
        }
    }
}

impl DbConfig {
    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.apiroot)
    }

    /// Check the fields needed to talk to the service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(invalid("host", "must not be empty"));
        }
        if self.host.contains('/') || self.host.contains(':') {
            return Err(invalid("host", "must be a bare host name, without scheme or port"));
        }
        if self.port == 0 {
            return Err(invalid("port", "must be between 1 and 65535"));
        }
        if !self.apiroot.is_empty() && !self.apiroot.starts_with('/') {
            return Err(invalid("apiroot", "must be empty or start with '/'"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port '{text}'"))),
    }
}
