//! Chat history endpoint

use crate::api::client::ApiClient;
use crate::models::ChatMessage;
use crate::utils::errors::Result;

/// `GET /messages/:groupId` — full message history for a group
/// conversation, oldest first.
pub async fn history(client: &ApiClient, group_id: &str) -> Result<Vec<ChatMessage>> {
    client.get(&format!("/messages/{group_id}")).await
}
