//! Error types.
//!
//! [`HttpError`] is the single failure shape carried by a failed
//! [`Outcome`](crate::outcome::Outcome). It never wraps a transport library
//! type, so it can be cloned, compared and serialized.

use serde::Serialize;
use thiserror::Error;

/// Construction-time error (bad configuration, client build failure).
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Config error: {0}")]
    Config(String),

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Failure of a single API call.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HttpError {
    #[error("Request failed: {message}")]
    Network { message: String },

    #[error("Timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Server error {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl HttpError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        HttpError::InvalidParameter {
            message: message.into(),
        }
    }

    /// Build a `Status` error from a non-2xx response.
    ///
    /// The backend answers errors with `{"error": "..."}`; that message is
    /// preferred, then `message`, then the raw text, then the canonical reason.
    pub(crate) fn from_status(status: u16, body: &[u8], reason: Option<&str>) -> Self {
        let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
        let envelope = parsed
            .as_ref()
            .and_then(|v| serde_json::from_value::<ErrorResponse>(v.clone()).ok());

        let text = String::from_utf8_lossy(body).trim().to_string();
        let message = envelope
            .and_then(|e| e.message)
            .or_else(|| (!text.is_empty()).then_some(text))
            .or_else(|| reason.map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        HttpError::Status {
            status,
            message,
            body: parsed,
        }
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            return HttpError::Timeout { timeout_ms };
        }
        match err.status() {
            Some(status) => HttpError::Status {
                status: status.as_u16(),
                message: err.to_string(),
                body: None,
            },
            None => HttpError::Network {
                message: err.to_string(),
            },
        }
    }
}

/// Error envelope returned by the backend.
#[derive(Debug, Clone, serde::Deserialize)]
struct ErrorResponse {
    #[serde(alias = "error")]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_prefers_error_envelope() {
        let err = HttpError::from_status(404, br#"{"error":"Resource not found"}"#, Some("Not Found"));
        assert_eq!(
            err,
            HttpError::Status {
                status: 404,
                message: "Resource not found".to_string(),
                body: Some(json!({"error": "Resource not found"})),
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_accepts_message_field() {
        let err = HttpError::from_status(400, br#"{"message":"bad symbol"}"#, None);
        assert!(matches!(err, HttpError::Status { ref message, .. } if message == "bad symbol"));
    }

    #[test]
    fn test_status_falls_back_to_text_then_reason() {
        let err = HttpError::from_status(400, b"Unsupported interval", Some("Bad Request"));
        assert!(matches!(
            err,
            HttpError::Status { ref message, body: None, .. } if message == "Unsupported interval"
        ));

        let err = HttpError::from_status(502, b"", Some("Bad Gateway"));
        assert!(matches!(err, HttpError::Status { ref message, .. } if message == "Bad Gateway"));

        let err = HttpError::from_status(599, b"", None);
        assert!(matches!(err, HttpError::Status { ref message, .. } if message == "Unknown error"));
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(HttpError::Timeout { timeout_ms: 10 }.status(), None);
        assert_eq!(
            HttpError::Status {
                status: 409,
                message: "exists".into(),
                body: None,
            }
            .status(),
            Some(409)
        );
        assert!(HttpError::Timeout { timeout_ms: 10 }.is_timeout());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let value = serde_json::to_value(HttpError::Timeout { timeout_ms: 10_000 }).unwrap();
        assert_eq!(value, json!({"kind": "timeout", "timeout_ms": 10_000}));

        let value = serde_json::to_value(HttpError::invalid_parameter("empty id")).unwrap();
        assert_eq!(value, json!({"kind": "invalid_parameter", "message": "empty id"}));
    }
}
