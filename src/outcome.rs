//! `Outcome<T>` — the uniform result of every API call.
//!
//! Exactly one of `data` / `error` is populated. Serialized, an outcome is
//! `{"data": <body>, "error": null}` or `{"data": null, "error": <error>}`.

use crate::error::HttpError;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::future::Future;

/// Result of a single request: the decoded body or the error that prevented it.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(HttpError),
}

impl<T> Outcome<T> {
    /// Await a request and normalize its result. Nothing escapes as an `Err`.
    pub async fn wrap<F>(request: F) -> Self
    where
        F: Future<Output = Result<T, HttpError>>,
    {
        request.await.into()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&HttpError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<HttpError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn into_result(self) -> Result<T, HttpError> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(err) => Err(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T> From<Result<T, HttpError>> for Outcome<T> {
    fn from(result: Result<T, HttpError>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(err) => Outcome::Failure(err),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, HttpError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_populates_only_data() {
        let outcome: Outcome<u32> = Ok(5).into();
        assert_eq!(outcome.data(), Some(&5));
        assert!(outcome.error().is_none());
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_failure_populates_only_error() {
        let err = HttpError::Timeout { timeout_ms: 10_000 };
        let outcome: Outcome<u32> = Err(err.clone()).into();
        assert!(outcome.data().is_none());
        assert_eq!(outcome.error(), Some(&err));
        assert_eq!(outcome.into_result(), Err(err));
    }

    #[test]
    fn test_wrap_normalizes_future() {
        let ok = tokio_test::block_on(Outcome::wrap(async { Ok::<_, HttpError>("body") }));
        assert_eq!(ok, Outcome::Success("body"));

        let failed = tokio_test::block_on(Outcome::<()>::wrap(async {
            Err(HttpError::Network {
                message: "connection refused".into(),
            })
        }));
        assert!(matches!(failed.error(), Some(HttpError::Network { .. })));
    }

    #[test]
    fn test_map_keeps_failure() {
        let outcome: Outcome<u32> = Outcome::Failure(HttpError::invalid_parameter("x"));
        assert!(outcome.map(|n| n * 2).is_failure());
        assert_eq!(Outcome::Success(2).map(|n| n * 2).into_data(), Some(4));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Outcome::Success(json!([1, 2]))).unwrap();
        assert_eq!(value, json!({"data": [1, 2], "error": null}));

        let outcome: Outcome<serde_json::Value> = Outcome::Failure(HttpError::Status {
            status: 500,
            message: "Internal server error".into(),
            body: None,
        });
        let value = serde_json::to_value(outcome).unwrap();
        assert_eq!(
            value,
            json!({
                "data": null,
                "error": {
                    "kind": "status",
                    "status": 500,
                    "message": "Internal server error",
                    "body": null
                }
            })
        );
    }
}
