//! Group endpoints

use crate::api::client::ApiClient;
use crate::api::Ack;
use crate::models::{Group, GroupData};
use crate::utils::errors::Result;

/// `GET /groups`
pub async fn list(client: &ApiClient) -> Result<Vec<Group>> {
    client.get("/groups").await
}

/// `POST /groups`
pub async fn create(client: &ApiClient, data: &GroupData) -> Result<Group> {
    client.post("/groups", data).await
}

/// `POST /groups/:id/join`
pub async fn join(client: &ApiClient, group_id: &str) -> Result<Ack> {
    client.post_empty(&format!("/groups/{group_id}/join")).await
}

/// `POST /groups/:id/leave`
pub async fn leave(client: &ApiClient, group_id: &str) -> Result<Ack> {
    client.post_empty(&format!("/groups/{group_id}/leave")).await
}
