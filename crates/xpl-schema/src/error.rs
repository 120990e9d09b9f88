use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no response contract named '{0}'")]
    NotFound(String),

    /// The response broke `contract`; one message per violation.
    #[error("response breaks the {contract} contract: {}", errors.join("; "))]
    ValidationFailed {
        contract: String,
        errors: Vec<String>,
    },

    #[error("contract {contract} does not compile: {reason}")]
    Generation { contract: String, reason: String },
}
