//! Symbol domain — tradable symbol representation.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::ResourceId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A symbol (e.g. `ETHUSDT`) as returned by `/api/symbols`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The `name` attribute, when the backend sends one as a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}
