//! # Ticks Client
//!
//! A Rust client for the ticks backend REST API supporting both native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Identifiers, domain representations, `Outcome`, errors (always available)
//! 2. **Config** — `ClientConfig`: base URL, timeout, credential forwarding
//! 3. **HTTP API** — `TicksHttp`, one method per endpoint, one request per call
//! 4. **High-Level Client** — `TicksClient` with `users()`, `symbols()`, `markets()`
//!
//! Every high-level method returns an [`Outcome`](outcome::Outcome): either the
//! response body of a 2xx reply or the [`HttpError`](error::HttpError) that
//! prevented one. Bodies are [`Body`](body::Body) values: typed when they match
//! the resource representation, kept as raw JSON otherwise. Nothing is retried,
//! cached or thrown.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ticks_client::prelude::*;
//!
//! let client = TicksClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! let users = client.users().list().await;
//! match users.error() {
//!     None => println!("{} users", users.record().map_or(0, Vec::len)),
//!     Some(err) => eprintln!("listing users failed: {err}"),
//! }
//!
//! let markets = client.markets().list("7").await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): representations and sub-clients.
pub mod domain;

/// Error types.
pub mod error;

/// The uniform `{data, error}` result of every API call.
pub mod outcome;

/// Successful response bodies, typed when they match the representation.
pub mod body;

/// Network URL constants.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

/// Transport configuration shared by every request.
pub mod config;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TicksClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::ResourceId;

    // Domain representations
    pub use crate::domain::market::Market;
    pub use crate::domain::symbol::Symbol;
    pub use crate::domain::user::User;

    // Results and errors
    pub use crate::error::{HttpError, SdkError};
    pub use crate::body::Body;
    pub use crate::outcome::Outcome;

    // Config + network
    pub use crate::config::ClientConfig;
    pub use crate::network::{API_PREFIX, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, WS_PATH};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{MarketsClient, SymbolsClient, TicksClient, TicksClientBuilder, UsersClient};
    #[cfg(feature = "http")]
    pub use crate::http::TicksHttp;
}
