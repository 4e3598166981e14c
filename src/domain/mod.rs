//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — The resource representation as the backend sends it
//! - `client.rs` — Sub-client with one `Outcome`-returning method per endpoint

pub mod market;
pub mod symbol;
pub mod user;
