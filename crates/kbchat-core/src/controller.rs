//! Message lifecycle controller — one send cycle per call.
//!
//! Implements the optimistic-update protocol:
//! 1. Append the user message and a placeholder reply (status Sending)
//! 2. Await the remote answer
//! 3. Reconcile: drop the placeholder, then either mark the user
//!    message Sent and append the parsed reply, or mark it Error
//!
//! The store borrow is released before the await point, so other
//! intents (switching, deleting, clearing) stay responsive while a
//! send is in flight. Reconciliation is keyed by the ids captured at
//! send time; if the conversation disappears mid-flight, every
//! reconciliation step degrades to a no-op.
//!
//! Concurrent sends against one conversation are allowed. Each cycle
//! only ever touches its own captured message ids, so overlapping
//! cycles interleave without corrupting each other; their completion
//! order is whatever the network gives us.

use std::cell::RefCell;
use std::rc::Rc;

use kbchat_types::message::{Message, MessageStatus};
use kbchat_types::settings::Settings;

use crate::parser::parse_response;
use crate::ports::{AskPort, AskRequest};
use crate::store::ConversationStore;

pub struct SendController {
    store: Rc<RefCell<ConversationStore>>,
}

impl SendController {
    pub fn new(store: Rc<RefCell<ConversationStore>>) -> Self {
        Self { store }
    }

    /// Execute one send cycle against `conversation_id`.
    ///
    /// Empty input (after trimming) or an unresolvable conversation id
    /// is a no-op. Remote failures are swallowed here: the caller only
    /// observes the user message's status flipping to Error.
    pub async fn send(
        &self,
        conversation_id: &str,
        raw_input: &str,
        settings: &Settings,
        backend: &dyn AskPort,
    ) {
        let query = raw_input.trim();
        if query.is_empty() {
            return;
        }

        // Optimistic insert: user message plus pending placeholder.
        let (user_id, pending_id) = {
            let mut store = self.store.borrow_mut();
            if store.get(conversation_id).is_none() {
                return;
            }
            let user = Message::user(query);
            let user_id = user.id.clone();
            store.append_message(conversation_id, user);

            let pending = Message::assistant_pending();
            let pending_id = pending.id.clone();
            store.append_message(conversation_id, pending);
            (user_id, pending_id)
        };

        let request = AskRequest::new(query, settings);
        match backend.ask(request).await {
            Ok(reply) => {
                let parsed = parse_response(&reply.content);
                let mut store = self.store.borrow_mut();
                store.remove_message(conversation_id, &pending_id);
                store.update_message(conversation_id, &user_id, |m| {
                    m.status = MessageStatus::Sent;
                });
                store.append_message(
                    conversation_id,
                    Message::assistant_reply(parsed.display, reply.sources, parsed.think),
                );
            }
            Err(e) => {
                log::error!("send failed for conversation {}: {}", conversation_id, e);
                let mut store = self.store.borrow_mut();
                store.remove_message(conversation_id, &pending_id);
                store.update_message(conversation_id, &user_id, |m| {
                    m.status = MessageStatus::Error;
                });
            }
        }
    }
}
