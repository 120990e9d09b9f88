//! Cross-cutting error types for xpload.
//!
//! Transport and validation errors live in `xpl-client` and `xpl-schema`;
//! push-stage errors in `xpl-push`. The CLI converges all of them in `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any xpload crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A write was requested against an endpoint outside the allow-list.
    #[error("Wrong endpoint {0}")]
    InvalidEndpoint(String),

    /// A read was requested against an unknown collection.
    #[error("Wrong component {0}")]
    InvalidComponent(String),
}
