//! Chat message types.
//!
//! This module contains the wire format returned by the remote API and the
//! display-ready message it is translated into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who a message is attributed to, from the console operator's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Written by the console side (an administrator).
    Own,
    /// Written by the client or any other participant.
    Other,
}

/// A chat record exactly as the remote API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChatRecord {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_avatar: Option<String>,
    pub text: String,
    #[serde(rename = "createdAt", alias = "serverTimestamp")]
    pub server_timestamp: DateTime<Utc>,
    #[serde(default, rename = "isFromAdmin", alias = "isFromAdministrator")]
    pub is_from_administrator: bool,
}

/// A single display-ready message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-assigned identifier.
    pub id: String,
    /// The message text.
    pub content: String,
    /// Whether the operator or someone else wrote it.
    pub role: MessageRole,
    /// Server timestamp of the message.
    pub created_at: DateTime<Utc>,
    /// Display name of the author.
    pub sender_name: String,
    /// Avatar URL of the author, if the API provided one.
    pub sender_avatar: Option<String>,
}

impl From<RawChatRecord> for ChatMessage {
    fn from(raw: RawChatRecord) -> Self {
        let role = if raw.is_from_administrator {
            MessageRole::Own
        } else {
            MessageRole::Other
        };

        Self {
            id: raw.id,
            content: raw.text,
            role,
            created_at: raw.server_timestamp,
            sender_name: raw.sender_name,
            sender_avatar: raw.sender_avatar,
        }
    }
}
