//! # xpl-client
//!
//! HTTP client for the calibration store's REST API.
//!
//! The store exposes one collection per record type:
//! - `gt` (tags), `pt` (domains), `pl` (domain lists), `piov` (payload intervals)
//!   accept GET (optionally `/{id}`) and POST
//! - `gttype`, `gtstatus` accept POST only
//! - `payloadiovs` answers filtered GETs by tag name and interval
//!
//! Every response is validated against the entry contracts in `xpl-schema`
//! before anything is taken from it. Failures come back as [`ClientError`];
//! nothing is swallowed.

mod error;
mod http;
mod reader;
mod writer;

pub use error::ClientError;
pub use writer::DEFAULT_CLASSIFIER_NAME;

use std::time::Duration;

use xpl_config::DbConfig;
use xpl_schema::SchemaRegistry;

// ── Client ─────────────────────────────────────────────────────────

/// Session context for one process invocation: the base URL, the HTTP
/// client, and the compiled response contracts.
///
/// Built once and passed by reference to everything that talks to the store.
pub struct XploadClient {
    http: reqwest::Client,
    base_url: String,
    schemas: SchemaRegistry,
}

impl XploadClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8080/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("xpload/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            schemas: SchemaRegistry::new(),
        })
    }

    /// Create a client from resolved connection parameters.
    ///
    /// # Errors
    ///
    /// See [`XploadClient::new`].
    pub fn from_config(config: &DbConfig) -> Result<Self, ClientError> {
        Self::new(config.url(), Duration::from_secs(config.timeout_secs))
    }

    /// Base URL every endpoint path is appended to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = XploadClient::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.endpoint_url("gt"), "http://localhost:8080/api/gt");
    }

    #[test]
    fn from_config_uses_config_url() {
        let config = DbConfig {
            host: "db".into(),
            port: 8000,
            apiroot: "/cdb".into(),
            ..Default::default()
        };
        let client = XploadClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://db:8000/cdb");
    }
}
