//! Low-level HTTP client — `TicksHttp`.
//!
//! One method per API endpoint, returning `Result<T, HttpError>`. Each call
//! issues exactly one request: there is no retry, caching or deduplication.
//! Every 2xx response is `Ok`, whatever its body; only transport failures,
//! timeouts and non-2xx statuses are `Err`. Layer 4 wraps these results into
//! `Outcome`s.

use crate::body::Body;
use crate::config::ClientConfig;
use crate::domain::market::Market;
use crate::domain::symbol::Symbol;
use crate::domain::user::User;
use crate::error::{HttpError, SdkError};
use crate::network::API_PREFIX;
use crate::shared::ResourceId;

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Low-level HTTP client for the ticks REST API.
#[derive(Clone)]
pub struct TicksHttp {
    base_url: String,
    client: Client,
    timeout: Duration,
    with_credentials: bool,
}

impl TicksHttp {
    pub fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;

        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(config.timeout())
                .cookie_store(config.with_credentials)
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: config.api_base().to_string(),
            client: builder.build()?,
            timeout: config.timeout(),
            with_credentials: config.with_credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// The per-request timeout in whole milliseconds, saturating at `u64::MAX`.
    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    // ── Users ────────────────────────────────────────────────────────────

    pub async fn get_users(&self) -> Result<Body<Vec<User>>, HttpError> {
        self.get(&format!("{}/users", API_PREFIX)).await.map(Body::from_value)
    }

    pub async fn get_user(&self, id: &ResourceId) -> Result<Body<User>, HttpError> {
        let path = format!("{}/users/{}", API_PREFIX, id.path_segment()?);
        self.get(&path).await.map(Body::from_value)
    }

    pub async fn create_user<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<Body<User>, HttpError> {
        self.post(&format!("{}/users", API_PREFIX), payload)
            .await
            .map(Body::from_value)
    }

    pub async fn update_user<B: Serialize + ?Sized>(
        &self,
        id: &ResourceId,
        payload: &B,
    ) -> Result<Body<User>, HttpError> {
        let path = format!("{}/users/{}", API_PREFIX, id.path_segment()?);
        self.put(&path, payload).await.map(Body::from_value)
    }

    pub async fn delete_user(&self, id: &ResourceId) -> Result<Value, HttpError> {
        let path = format!("{}/users/{}", API_PREFIX, id.path_segment()?);
        self.delete(&path).await
    }

    // ── Symbols ──────────────────────────────────────────────────────────

    pub async fn get_symbols(&self) -> Result<Body<Vec<Symbol>>, HttpError> {
        self.get(&format!("{}/symbols", API_PREFIX)).await.map(Body::from_value)
    }

    pub async fn get_symbol(&self, id: &ResourceId) -> Result<Body<Symbol>, HttpError> {
        let path = format!("{}/symbols/{}", API_PREFIX, id.path_segment()?);
        self.get(&path).await.map(Body::from_value)
    }

    pub async fn create_symbol<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<Body<Symbol>, HttpError> {
        self.post(&format!("{}/symbols", API_PREFIX), payload)
            .await
            .map(Body::from_value)
    }

    pub async fn update_symbol<B: Serialize + ?Sized>(
        &self,
        id: &ResourceId,
        payload: &B,
    ) -> Result<Body<Symbol>, HttpError> {
        let path = format!("{}/symbols/{}", API_PREFIX, id.path_segment()?);
        self.put(&path, payload).await.map(Body::from_value)
    }

    pub async fn delete_symbol(&self, id: &ResourceId) -> Result<Value, HttpError> {
        let path = format!("{}/symbols/{}", API_PREFIX, id.path_segment()?);
        self.delete(&path).await
    }

    // ── Markets (scoped under a symbol) ──────────────────────────────────

    pub async fn get_markets(
        &self,
        symbol_id: &ResourceId,
    ) -> Result<Body<Vec<Market>>, HttpError> {
        let path = format!("{}/symbols/{}/markets", API_PREFIX, symbol_id.path_segment()?);
        self.get(&path).await.map(Body::from_value)
    }

    pub async fn create_market<B: Serialize + ?Sized>(
        &self,
        symbol_id: &ResourceId,
        payload: &B,
    ) -> Result<Body<Market>, HttpError> {
        let path = format!("{}/symbols/{}/markets", API_PREFIX, symbol_id.path_segment()?);
        self.post(&path, payload).await.map(Body::from_value)
    }

    pub async fn update_market<B: Serialize + ?Sized>(
        &self,
        symbol_id: &ResourceId,
        market_id: &ResourceId,
        payload: &B,
    ) -> Result<Body<Market>, HttpError> {
        let path = format!(
            "{}/symbols/{}/markets/{}",
            API_PREFIX,
            symbol_id.path_segment()?,
            market_id.path_segment()?
        );
        self.put(&path, payload).await.map(Body::from_value)
    }

    pub async fn delete_market(
        &self,
        symbol_id: &ResourceId,
        market_id: &ResourceId,
    ) -> Result<Value, HttpError> {
        let path = format!(
            "{}/symbols/{}/markets/{}",
            API_PREFIX,
            symbol_id.path_segment()?,
            market_id.path_segment()?
        );
        self.delete(&path).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get(&self, path: &str) -> Result<Value, HttpError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, HttpError> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, HttpError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, HttpError> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let result = self.do_request(method.clone(), &url, body).await;
        if let Err(e) = &result {
            tracing::trace!(method = %method, url = %url, error = %e, "Request failed");
        }
        result
    }

    async fn do_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        let timeout_ms = self.timeout_ms();
        let mut req = self.client.request(method.clone(), url).timeout(self.timeout);

        // Native clients forward cookies through the client's cookie store.
        #[cfg(target_arch = "wasm32")]
        {
            if self.with_credentials {
                req = req.fetch_credentials_include();
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(e, timeout_ms))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| HttpError::from_reqwest(e, timeout_ms))?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            "Received response"
        );

        if !status.is_success() {
            return Err(HttpError::from_status(
                status.as_u16(),
                &bytes,
                status.canonical_reason(),
            ));
        }

        Ok(decode_body(&bytes))
    }
}

/// Decode a 2xx body. JSON is parsed; an empty body is `""` and any other
/// text is kept as a JSON string.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
