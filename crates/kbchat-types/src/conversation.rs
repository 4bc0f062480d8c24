use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Title given to a conversation until the user renames it
pub const DEFAULT_TITLE: &str = "New Chat";

/// A named, timestamped, ordered thread of messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    /// Creation time, immutable, used for sort/display
    pub timestamp: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            messages: Vec::new(),
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
