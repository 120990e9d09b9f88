use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schema-validated record of any collection, kept in its wire shape.
///
/// Used wherever the caller only needs to display what the server returned
/// (`show`, `fetch`). The typed records in this module are decoded from the
/// same JSON when field access is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Look up a wire field other than `id` or `name`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
