//! WASM-target tests for kbchat-core (Node.js runtime).
//!
//! Smoke-tests the store and parser under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use kbchat_core::parser::{parse_response, PARAGRAPH_BREAK};
use kbchat_core::store::ConversationStore;
use kbchat_types::message::Message;

// ─── ConversationStore Tests ─────────────────────────────

#[wasm_bindgen_test]
fn store_create_and_activate() {
    let mut store = ConversationStore::new();
    let id = store.create_conversation().id.clone();
    assert_eq!(store.active_id(), Some(id.as_str()));
    assert_eq!(store.len(), 1);
}

#[wasm_bindgen_test]
fn store_delete_active_promotes_first_remaining() {
    let mut store = ConversationStore::new();
    let a = store.create_conversation().id.clone();
    let b = store.create_conversation().id.clone();

    store.delete_conversation(&b);
    assert_eq!(store.active_id(), Some(a.as_str()));
}

#[wasm_bindgen_test]
fn store_append_and_clear() {
    let mut store = ConversationStore::new();
    let id = store.create_conversation().id.clone();
    store.append_message(&id, Message::user("hello"));
    assert_eq!(store.get(&id).unwrap().messages.len(), 1);

    store.clear_conversation(&id);
    assert!(store.get(&id).unwrap().messages.is_empty());
}

// ─── Parser Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn parser_plain_text() {
    let parsed = parse_response("plain text");
    assert_eq!(parsed.display, "plain text");
    assert!(parsed.think.is_none());
}

#[wasm_bindgen_test]
fn parser_reasoning_and_markers() {
    let parsed = parse_response("<think>reasoning here</think>Hello\n\nWorld");
    assert_eq!(parsed.think.as_deref(), Some("reasoning here"));
    assert_eq!(parsed.display, format!("Hello{}World", PARAGRAPH_BREAK));
}
