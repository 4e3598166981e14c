//! Users sub-client — CRUD over `/api/users`.

use crate::body::Body;
use crate::client::TicksClient;
use crate::domain::user::User;
use crate::outcome::Outcome;
use crate::shared::ResourceId;
use serde::Serialize;

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a TicksClient,
}

impl<'a> Users<'a> {
    /// `GET /api/users`
    pub async fn list(&self) -> Outcome<Body<Vec<User>>> {
        Outcome::wrap(self.client.http.get_users()).await
    }

    /// `GET /api/users/{id}`
    pub async fn get(&self, id: impl Into<ResourceId>) -> Outcome<Body<User>> {
        let id = id.into();
        Outcome::wrap(self.client.http.get_user(&id)).await
    }

    /// `POST /api/users`
    pub async fn create<B: Serialize + ?Sized>(&self, payload: &B) -> Outcome<Body<User>> {
        Outcome::wrap(self.client.http.create_user(payload)).await
    }

    /// `PUT /api/users/{id}`
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        payload: &B,
    ) -> Outcome<Body<User>> {
        let id = id.into();
        Outcome::wrap(self.client.http.update_user(&id, payload)).await
    }

    /// `DELETE /api/users/{id}`. The body is backend-defined; empty is `""`.
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Outcome<serde_json::Value> {
        let id = id.into();
        Outcome::wrap(self.client.http.delete_user(&id)).await
    }
}
