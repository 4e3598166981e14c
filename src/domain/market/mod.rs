//! Market domain — markets listed under a symbol.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::ResourceId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Market ──────────────────────────────────────────────────────────────────

/// A market of a symbol (e.g. `binance_spot`), as returned by
/// `/api/symbols/{symbol_id}/markets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Market {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<ResourceId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Market {
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
}
