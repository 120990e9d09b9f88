//! Client error types.

use thiserror::Error;
use xpl_core::errors::CoreError;
use xpl_schema::SchemaError;

/// Errors that can occur when talking to the calibration store.
///
/// Each variant is a distinct failure class so callers never have to guess
/// whether an empty result means "nothing there" or "the call failed".
#[derive(Debug, Error)]
pub enum ClientError {
    /// A write was requested against an endpoint outside the allow-list.
    /// No request was sent.
    #[error("Wrong endpoint {0}")]
    InvalidEndpoint(String),

    /// A read was requested against an unknown collection. No request was sent.
    #[error("Wrong component {0}")]
    InvalidComponent(String),

    /// HTTP transport error (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}) from {url}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Request URL.
        url: String,
        /// Response body.
        message: String,
    },

    /// The body was not JSON, or not the record shape expected.
    #[error("cannot decode response from {url}: {reason}")]
    Decode {
        /// Request URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The body was JSON but broke the response contract.
    #[error("invalid response from {url}: {source}")]
    Validation {
        /// Request URL.
        url: String,
        #[source]
        source: SchemaError,
    },
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidEndpoint(name) => Self::InvalidEndpoint(name),
            CoreError::InvalidComponent(name) => Self::InvalidComponent(name),
        }
    }
}
