//! Deserializers for informational fields whose wire shape the store does
//! not pin down. A value that is not a usable number decodes as `None`
//! instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_i64(),
    }))
}

pub fn opt_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_u64(),
    }))
}
