use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry as returned by `GET /api/products`.
///
/// Only `barcode` and `name` are interpreted; every other field the backend
/// sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Display name, empty when the backend did not send one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
