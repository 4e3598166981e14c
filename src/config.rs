//! Transport configuration — base URL, timeout and credential forwarding.
//!
//! One `ClientConfig` is captured when a [`TicksClient`](crate::client::TicksClient)
//! is built and applied identically to every request it issues.

use crate::error::SdkError;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, WS_PATH};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_API_URL: &str = "TICKS_API_URL";
/// Environment variable overriding [`ClientConfig::timeout_ms`].
pub const ENV_TIMEOUT_MS: &str = "TICKS_API_TIMEOUT_MS";
/// Environment variable overriding [`ClientConfig::with_credentials`].
pub const ENV_WITH_CREDENTIALS: &str = "TICKS_API_WITH_CREDENTIALS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme + host (+ optional port) of the backend; `/api/...` paths are appended.
    pub base_url: String,
    /// Timeout for a whole request, in milliseconds.
    pub timeout_ms: u64,
    /// Forward ambient credentials (cookies) with every request.
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            with_credentials: true,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TICKS_API_URL`, `TICKS_API_TIMEOUT_MS` and
    /// `TICKS_API_WITH_CREDENTIALS` when set.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("{ENV_TIMEOUT_MS} must be an integer, got {raw:?}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_WITH_CREDENTIALS) {
            config.with_credentials = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(SdkError::Config(format!(
                        "{ENV_WITH_CREDENTIALS} must be a boolean, got {raw:?}"
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// URL of the WebSocket upgrade endpoint on the same host.
    pub fn ws_url(&self) -> String {
        let base = self.api_base();
        let base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{base}{WS_PATH}")
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        let base = self.api_base();
        let host = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))
            .ok_or_else(|| {
                SdkError::Config(format!(
                    "base_url must start with http:// or https://, got {:?}",
                    self.base_url
                ))
            })?;
        if host.is_empty() {
            return Err(SdkError::Config("base_url is missing a host".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(SdkError::Config("timeout_ms must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
        assert!(config.with_credentials);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://ticks.example.com/"),
            (ENV_TIMEOUT_MS, "2500"),
            (ENV_WITH_CREDENTIALS, "false"),
        ]))
        .unwrap();
        assert_eq!(config.api_base(), "https://ticks.example.com");
        assert_eq!(config.timeout_ms, 2500);
        assert!(!config.with_credentials);
    }

    #[test]
    fn test_from_lookup_missing_uses_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_WITH_CREDENTIALS, "maybe")])),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "localhost:5000")])),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_empty_host() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            base_url: "http://".into(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ws_url() {
        assert_eq!(ClientConfig::default().ws_url(), "ws://localhost:5000/ws");
        let config = ClientConfig {
            base_url: "https://ticks.example.com/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.ws_url(), "wss://ticks.example.com/ws");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_ms": 500}"#).unwrap();
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.with_credentials);
    }
}
