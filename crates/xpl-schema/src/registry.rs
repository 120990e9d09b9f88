//! Registry of the response contracts used by the xpload client.
//!
//! Schemas are compiled once when the registry is built; validation reports
//! every violation rather than stopping at the first one.

use std::collections::HashMap;

use serde_json::{Value, json};

use crate::error::SchemaError;

/// Name of the single-entry contract (write responses).
pub const ENTRY: &str = "entry";

/// Name of the array-of-entry contract (read responses).
pub const ENTRY_LIST: &str = "entry_list";

fn entry_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "name": {"type": "string"}
        },
        "required": ["id"]
    })
}

fn entry_list_schema() -> Value {
    json!({
        "type": "array",
        "items": entry_schema()
    })
}

/// Central store of the response schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
    validators: HashMap<&'static str, jsonschema::Validator>,
}

impl SchemaRegistry {
    /// Build a registry holding the `entry` and `entry_list` contracts.
    ///
    /// # Panics
    ///
    /// Panics if one of the built-in schemas fails to compile. They are
    /// static literals, so this only happens if one is edited into an
    /// invalid schema.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: HashMap::new(),
            validators: HashMap::new(),
        };
        registry
            .register(ENTRY, entry_schema())
            .expect("entry schema should compile");
        registry
            .register(ENTRY_LIST, entry_list_schema())
            .expect("entry_list schema should compile");
        registry
    }

    /// Compile `schema` and store it as contract `name`, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if the schema does not compile.
    pub fn register(&mut self, name: &'static str, schema: Value) -> Result<(), SchemaError> {
        let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError::Generation {
            contract: name.to_string(),
            reason: e.to_string(),
        })?;
        self.schemas.insert(name, schema);
        self.validators.insert(name, validator);
        Ok(())
    }

    /// Raw JSON Schema of contract `name`.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Check `instance` against contract `name`, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown contract, or
    /// `SchemaError::ValidationFailed` listing each violation with its path.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let validator = self
            .validators
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at '{}'", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            return Ok(());
        }
        Err(SchemaError::ValidationFailed {
            contract: name.to_string(),
            errors,
        })
    }

    /// Validate a read response that has already been normalized to an array.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if any element breaks the
    /// entry contract or the value is not an array.
    pub fn validate_entries(&self, instance: &Value) -> Result<(), SchemaError> {
        self.validate(ENTRY_LIST, instance)
    }

    /// Validate a single-entry write response.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if the value is not one entry.
    pub fn validate_entry(&self, instance: &Value) -> Result<(), SchemaError> {
        self.validate(ENTRY, instance)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
