//! In-memory conversation store.
//!
//! Holds the single writable copy of all conversation state plus the
//! active-conversation id. Every mutation is synchronous and keyed by
//! explicit identifiers, so a pending network turnaround can never
//! misdirect an update: mutations against ids that no longer resolve
//! are no-ops.

use kbchat_types::conversation::Conversation;
use kbchat_types::message::Message;

#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active_id: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation, insert it at the front, and make it active.
    pub fn create_conversation(&mut self) -> &Conversation {
        let conv = Conversation::new();
        self.active_id = Some(conv.id.clone());
        self.conversations.insert(0, conv);
        &self.conversations[0]
    }

    /// Remove a conversation; no-op when the id does not resolve.
    /// Deleting the active conversation makes the first remaining one
    /// active, or none when the store is empty.
    pub fn delete_conversation(&mut self, id: &str) {
        self.conversations.retain(|c| c.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.conversations.first().map(|c| c.id.clone());
        }
    }

    /// Replace a conversation's title in place. Position, timestamp and
    /// messages are untouched. Callers discard empty titles; the store
    /// accepts whatever it is given.
    pub fn rename_conversation(&mut self, id: &str, new_title: impl Into<String>) {
        if let Some(conv) = self.get_mut(id) {
            conv.title = new_title.into();
        }
    }

    /// Empty a conversation's message list, leaving every other field alone.
    pub fn clear_conversation(&mut self, id: &str) {
        if let Some(conv) = self.get_mut(id) {
            conv.messages.clear();
        }
    }

    /// Make a conversation active if its id resolves.
    pub fn select_conversation(&mut self, id: &str) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.active_id = Some(id.to_string());
        }
    }

    /// Append a message to the end of a conversation.
    /// Returns false when the conversation does not exist.
    pub fn append_message(&mut self, conversation_id: &str, message: Message) -> bool {
        match self.get_mut(conversation_id) {
            Some(conv) => {
                conv.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Remove exactly one message by id.
    /// Returns false when either id does not resolve.
    pub fn remove_message(&mut self, conversation_id: &str, message_id: &str) -> bool {
        match self.get_mut(conversation_id) {
            Some(conv) => {
                let before = conv.messages.len();
                conv.messages.retain(|m| m.id != message_id);
                conv.messages.len() != before
            }
            None => false,
        }
    }

    /// Apply a partial update to exactly one message, leaving the rest
    /// untouched. Returns false when either id does not resolve.
    pub fn update_message<F>(&mut self, conversation_id: &str, message_id: &str, patch: F) -> bool
    where
        F: FnOnce(&mut Message),
    {
        if let Some(conv) = self.get_mut(conversation_id) {
            if let Some(msg) = conv.messages.iter_mut().find(|m| m.id == message_id) {
                patch(msg);
                return true;
            }
        }
        false
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Conversations in display order (most recently created first)
    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }
}
