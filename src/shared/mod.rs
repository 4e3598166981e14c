//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in domain types.

use crate::error::HttpError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

// ─── ResourceId ──────────────────────────────────────────────────────────────

/// Opaque identifier of a user, symbol or market (e.g. `"42"`, `7`).
///
/// The backend may send identifiers as strings or integers. The JSON kind is
/// kept, so an id serializes back exactly as it was received. Equality and
/// hashing only look at the textual form: `"42"` and `42` are the same id.
#[derive(Debug, Clone)]
pub struct ResourceId {
    text: String,
    number: Option<Number>,
}

impl ResourceId {
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            text: s.into(),
            number: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the id was a JSON integer.
    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Percent-encoded form for use as a single URL path segment.
    ///
    /// Empty identifiers are rejected before any request is made.
    pub fn path_segment(&self) -> Result<String, HttpError> {
        if self.is_empty() {
            return Err(HttpError::invalid_parameter("identifier must not be empty"));
        }
        Ok(urlencoding::encode(&self.text).into_owned())
    }

    fn from_number(number: Number) -> Self {
        Self {
            text: number.to_string(),
            number: Some(number),
        }
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for ResourceId {}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for ResourceId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ResourceId {
                fn from(n: $t) -> Self {
                    Self::from_number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_int!(u32, u64, i32, i64, usize);

impl FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceId::new(s))
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.number {
            Some(number) => number.serialize(serializer),
            None => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(Number),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => Ok(ResourceId::new(s)),
            Raw::Num(n) if n.is_i64() || n.is_u64() => Ok(ResourceId::from_number(n)),
            Raw::Num(n) => Err(serde::de::Error::custom(format!(
                "identifier must be a string or an integer, got {n}"
            ))),
        }
    }
}
