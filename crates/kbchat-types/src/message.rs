use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Delivery state of a message created by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Error,
}

/// Content shown by the placeholder reply while a send is in flight.
/// The placeholder is always removed before the send cycle completes.
pub const PENDING_REPLY_TEXT: &str = "Generating response...";

/// One turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    pub timestamp: String,
    pub status: MessageStatus,
    /// Evidence snippets backing an assistant reply
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<Source>,
    /// Reasoning segment extracted from the raw reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub think: Option<String>,
}

/// A retrieved evidence snippet attached to an assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub content: String,
    /// Similarity score in [0, 1], shown as a percentage
    pub similarity: f32,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: text.into(),
            role: Role::User,
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: MessageStatus::Sending,
            sources: Vec::new(),
            think: None,
        }
    }

    /// Transient assistant message shown while a reply is pending
    pub fn assistant_pending() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: PENDING_REPLY_TEXT.to_string(),
            role: Role::Assistant,
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: MessageStatus::Sending,
            sources: Vec::new(),
            think: None,
        }
    }

    /// Final assistant reply after a successful send cycle
    pub fn assistant_reply(
        content: impl Into<String>,
        sources: Vec<Source>,
        think: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            role: Role::Assistant,
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: MessageStatus::Sent,
            sources,
            think,
        }
    }
}
