//! High-level client — `TicksClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared configuration and the accessors.

use crate::config::ClientConfig;
use crate::domain::market::client::Markets;
use crate::domain::symbol::client::Symbols;
use crate::domain::user::client::Users;
use crate::error::SdkError;
use crate::http::TicksHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::symbol::client::Symbols as SymbolsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the ticks API.
///
/// Provides nested sub-client accessors for each resource group:
/// `client.users()`, `client.symbols()`, `client.markets()`.
/// Cloning is cheap and clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct TicksClient {
    pub(crate) http: TicksHttp,
    pub(crate) config: ClientConfig,
}

impl TicksClient {
    pub fn builder() -> TicksClientBuilder {
        TicksClientBuilder::default()
    }

    /// Client with the default configuration (`http://localhost:5000`, 10 s timeout).
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        Ok(Self {
            http: TicksHttp::new(&config)?,
            config,
        })
    }

    /// Client configured from `TICKS_API_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn symbols(&self) -> Symbols<'_> {
        Symbols { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    /// The transport configuration every request is issued with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Access to the low-level endpoint methods returning `Result`s.
    pub fn http(&self) -> &TicksHttp {
        &self.http
    }

    /// URL of the `/ws` endpoint on the same backend.
    ///
    /// The WS connection is not managed here; it belongs to whichever
    /// component consumes the live stream.
    pub fn ws_url(&self) -> String {
        self.config.ws_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct TicksClientBuilder {
    config: ClientConfig,
}

impl TicksClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Forward cookies with every request (default `true`).
    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.config.with_credentials = enabled;
        self
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<TicksClient, SdkError> {
        TicksClient::from_config(self.config)
    }
}
