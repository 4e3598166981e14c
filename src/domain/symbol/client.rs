//! Symbols sub-client — CRUD over `/api/symbols`.

use crate::body::Body;
use crate::client::TicksClient;
use crate::domain::symbol::Symbol;
use crate::outcome::Outcome;
use crate::shared::ResourceId;
use serde::Serialize;

/// Sub-client for symbol operations.
pub struct Symbols<'a> {
    pub(crate) client: &'a TicksClient,
}

impl<'a> Symbols<'a> {
    /// `GET /api/symbols`
    pub async fn list(&self) -> Outcome<Body<Vec<Symbol>>> {
        Outcome::wrap(self.client.http.get_symbols()).await
    }

    /// `GET /api/symbols/{id}`
    pub async fn get(&self, id: impl Into<ResourceId>) -> Outcome<Body<Symbol>> {
        let id = id.into();
        Outcome::wrap(self.client.http.get_symbol(&id)).await
    }

    /// `POST /api/symbols`
    pub async fn create<B: Serialize + ?Sized>(&self, payload: &B) -> Outcome<Body<Symbol>> {
        Outcome::wrap(self.client.http.create_symbol(payload)).await
    }

    /// `PUT /api/symbols/{id}`
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        payload: &B,
    ) -> Outcome<Body<Symbol>> {
        let id = id.into();
        Outcome::wrap(self.client.http.update_symbol(&id, payload)).await
    }

    /// `DELETE /api/symbols/{id}`
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Outcome<serde_json::Value> {
        let id = id.into();
        Outcome::wrap(self.client.http.delete_symbol(&id)).await
    }
}
