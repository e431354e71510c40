//! Chat wire protocol
//!
//! Frames are JSON objects of the form `{"event": ..., "data": ...}`,
//! matching the backend's socket contract: the client emits `joinGroup`
//! and `sendMessage`, the server broadcasts `newMessage`.

use serde::{Deserialize, Serialize};

use crate::models::ChatMessage;

/// Frames emitted by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientFrame {
    /// Join a group conversation's room; data is the group's internal id
    JoinGroup(String),
    SendMessage(OutgoingMessage),
}

/// Payload of a `sendMessage` frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub group_id: String,
    pub message: String,
}

/// Frames broadcast by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerFrame {
    NewMessage(ChatMessage),
}
