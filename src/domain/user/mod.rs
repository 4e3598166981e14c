//! User domain — user representation.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::ResourceId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── User ────────────────────────────────────────────────────────────────────

/// A user as returned by `/api/users`.
///
/// Only the identifier is typed; every other field the backend sends is kept
/// in `attributes` untouched, so a fetched user can be edited and sent back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the updated user (payload builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User =
            serde_json::from_value(json!({"id": 42, "email": "ada@example.com", "admin": true}))
                .unwrap();
        assert_eq!(user.id, Some(ResourceId::from(42u64)));
        assert_eq!(user.get("email"), Some(&json!("ada@example.com")));
        assert_eq!(user.get("admin"), Some(&json!(true)));
        assert!(user.get("id").is_none());
    }

    #[test]
    fn test_payload_without_id_omits_it() {
        let payload = User::new().with("email", "ada@example.com");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"email": "ada@example.com"})
        );
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let raw = json!({"id": 42, "name": "ada"});
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }
}
