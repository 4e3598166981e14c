//! HTTP client layer — `TicksHttp`, one request per call.

pub mod client;

pub use client::TicksHttp;
