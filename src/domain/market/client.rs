//! Markets sub-client — CRUD over `/api/symbols/{symbol_id}/markets`.

use crate::body::Body;
use crate::client::TicksClient;
use crate::domain::market::Market;
use crate::outcome::Outcome;
use crate::shared::ResourceId;
use serde::Serialize;

/// Sub-client for the markets nested under a symbol.
///
/// Every method takes the parent symbol's identifier first.
pub struct Markets<'a> {
    pub(crate) client: &'a TicksClient,
}

impl<'a> Markets<'a> {
    /// `GET /api/symbols/{symbol_id}/markets`
    pub async fn list(&self, symbol_id: impl Into<ResourceId>) -> Outcome<Body<Vec<Market>>> {
        let symbol_id = symbol_id.into();
        Outcome::wrap(self.client.http.get_markets(&symbol_id)).await
    }

    /// `POST /api/symbols/{symbol_id}/markets`
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        symbol_id: impl Into<ResourceId>,
        payload: &B,
    ) -> Outcome<Body<Market>> {
        let symbol_id = symbol_id.into();
        Outcome::wrap(self.client.http.create_market(&symbol_id, payload)).await
    }

    /// `PUT /api/symbols/{symbol_id}/markets/{market_id}`
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        symbol_id: impl Into<ResourceId>,
        market_id: impl Into<ResourceId>,
        payload: &B,
    ) -> Outcome<Body<Market>> {
        let (symbol_id, market_id) = (symbol_id.into(), market_id.into());
        Outcome::wrap(
            self.client
                .http
                .update_market(&symbol_id, &market_id, payload),
        )
        .await
    }

    /// `DELETE /api/symbols/{symbol_id}/markets/{market_id}`
    pub async fn delete(
        &self,
        symbol_id: impl Into<ResourceId>,
        market_id: impl Into<ResourceId>,
    ) -> Outcome<serde_json::Value> {
        let (symbol_id, market_id) = (symbol_id.into(), market_id.into());
        Outcome::wrap(self.client.http.delete_market(&symbol_id, &market_id)).await
    }
}
