//! Chat message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message in a group conversation, as delivered both by
/// `GET /messages/:groupId` and the socket `newMessage` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub group: Option<String>,
    pub sender: MessageSender,
    pub text: String,
    pub sent_at: Option<DateTime<Utc>>,
}

/// Populated sender reference on a message
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl ChatMessage {
    /// Whether this message was sent by the given user
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender.id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes() {
        let json = r#"{
            "_id": "m1",
            "group": "g1",
            "sender": {"_id": "u1", "username": "ada", "fullName": "Ada Lovelace"},
            "text": "hello",
            "sentAt": "2026-01-15T10:00:00Z"
        }"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.text, "hello");
        assert!(message.is_from("u1"));
        assert!(!message.is_from("u2"));
        assert!(message.sent_at.is_some());
    }

    #[test]
    fn test_message_tolerates_missing_sent_at() {
        let json = r#"{"_id": "m2", "sender": {"_id": "u1"}, "text": "hi"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(message.sent_at.is_none());
        assert!(message.group.is_none());
    }
}
