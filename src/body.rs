//! `Body<T>` — a 2xx response body, typed when it matches `T`.
//!
//! Any successful response is data: a body that does not fit the expected
//! representation (empty, plain text, a confirmation object) is kept as
//! [`Body::Other`] instead of becoming an error.

use crate::outcome::Outcome;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body<T> {
    /// The body decoded as `T` and re-encodes to the same JSON.
    Record(T),
    /// Any other body, as received.
    Other(Value),
}

impl<T: Serialize + DeserializeOwned> Body<T> {
    /// Type the body as `T` only when doing so loses nothing.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(record) if serde_json::to_value(&record).ok().as_ref() == Some(&value) => {
                Body::Record(record)
            }
            _ => Body::Other(value),
        }
    }

    /// The body as JSON, identical to what the backend sent.
    pub fn to_value(&self) -> Value {
        match self {
            Body::Record(record) => serde_json::to_value(record).unwrap_or(Value::Null),
            Body::Other(value) => value.clone(),
        }
    }
}

impl<T> Body<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Body::Record(record) => Some(record),
            Body::Other(_) => None,
        }
    }

    pub fn into_record(self) -> Option<T> {
        match self {
            Body::Record(record) => Some(record),
            Body::Other(_) => None,
        }
    }

    pub fn other(&self) -> Option<&Value> {
        match self {
            Body::Record(_) => None,
            Body::Other(value) => Some(value),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Body::Record(_))
    }
}

impl<T> Outcome<Body<T>> {
    /// The typed body of a successful call, if it matched `T`.
    pub fn record(&self) -> Option<&T> {
        self.data().and_then(Body::record)
    }

    pub fn into_record(self) -> Option<T> {
        self.into_data().and_then(Body::into_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::User;
    use crate::shared::ResourceId;
    use serde_json::json;

    #[test]
    fn test_object_becomes_record() {
        let raw = json!({"id": 42, "name": "ada"});
        let body = Body::<User>::from_value(raw.clone());
        assert!(body.is_record());
        assert_eq!(body.record().and_then(|u| u.get("name")), Some(&json!("ada")));
        assert_eq!(body.to_value(), raw);
    }

    #[test]
    fn test_non_object_bodies_are_kept() {
        for raw in [json!(""), json!("created"), json!(true), json!(null), json!([1, 2])] {
            let body = Body::<User>::from_value(raw.clone());
            assert_eq!(body, Body::Other(raw.clone()));
            assert_eq!(body.to_value(), raw);
        }
    }

    #[test]
    fn test_lossy_record_is_kept_raw() {
        // `id: null` would be dropped when re-encoding a `User`.
        let raw = json!({"id": null, "name": "ada"});
        let body = Body::<User>::from_value(raw.clone());
        assert_eq!(body.other(), Some(&raw));
    }

    #[test]
    fn test_list_body() {
        let raw = json!([{"id": 1}, {"id": "2"}]);
        let body = Body::<Vec<User>>::from_value(raw.clone());
        assert_eq!(body.record().map(Vec::len), Some(2));
        assert_eq!(serde_json::to_value(&body).unwrap(), raw);
    }

    #[test]
    fn test_outcome_record_helpers() {
        let outcome: Outcome<Body<User>> =
            Outcome::Success(Body::from_value(json!({"id": 1})));
        assert_eq!(outcome.record().and_then(|u| u.id.clone()), Some(ResourceId::from(1u64)));

        let outcome: Outcome<Body<User>> = Outcome::Success(Body::Other(json!("")));
        assert!(outcome.record().is_none());
        assert!(outcome.is_success());
    }
}
