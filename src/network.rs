//! Network URL constants for the ticks backend.

/// Default REST API base URL (the local backend the dev proxy forwards to).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "/api";

/// WebSocket upgrade path. Not used by the REST client itself.
pub const WS_PATH: &str = "/ws";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
