use serde::{Deserialize, Serialize};

/// A payload category ("payload type").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Domain {
    pub id: i64,
    pub name: String,
}
