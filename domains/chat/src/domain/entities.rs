//! Domain entities for the Chat domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Chat message entity
///
/// Not persisted anywhere yet; the send flow is stateless. Kept as the
/// domain vocabulary for when history lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub role: ChatRole,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message
    pub fn new_user(content: String, timestamp: DateTime<Utc>) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            content,
            role: ChatRole::User,
            timestamp,
        }
    }

    /// Create a new assistant message
    pub fn new_assistant(content: String, timestamp: DateTime<Utc>) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            content,
            role: ChatRole::Assistant,
            timestamp,
        }
    }
}
