//! Push error types.

use thiserror::Error;
use xpl_client::ClientError;
use xpl_core::responses::Stage;

/// A push stopped before completing all four stages.
///
/// Records created by earlier stages are not rolled back.
#[derive(Debug, Error)]
pub enum PushError {
    /// Listing the collection of `stage` failed.
    #[error("{stage} lookup failed: {source}")]
    Read {
        stage: Stage,
        #[source]
        source: ClientError,
    },

    /// Creating the record of `stage` failed.
    #[error("{stage} creation failed: {source}")]
    Write {
        stage: Stage,
        #[source]
        source: ClientError,
    },
}

impl PushError {
    /// The stage at which the push stopped.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Read { stage, .. } | Self::Write { stage, .. } => *stage,
        }
    }
}
