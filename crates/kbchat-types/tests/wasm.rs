//! WASM-target tests for kbchat-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use kbchat_types::conversation::*;
use kbchat_types::error::*;
use kbchat_types::message::*;
use kbchat_types::settings::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert_eq!(msg.status, MessageStatus::Sending);
}

#[wasm_bindgen_test]
fn message_assistant_pending() {
    let msg = Message::assistant_pending();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, PENDING_REPLY_TEXT);
    assert_eq!(msg.status, MessageStatus::Sending);
}

#[wasm_bindgen_test]
fn message_assistant_reply() {
    let msg = Message::assistant_reply("answer", Vec::new(), None);
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.status, MessageStatus::Sent);
    assert!(msg.sources.is_empty());
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = Message::user("test input");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::User);
    assert_eq!(deserialized.content, "test input");
}

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
}

// ─── Conversation Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn conversation_new() {
    let conv = Conversation::new();
    assert_eq!(conv.title, DEFAULT_TITLE);
    assert!(conv.messages.is_empty());
    assert!(!conv.id.is_empty());
    assert!(!conv.timestamp.is_empty());
}

#[wasm_bindgen_test]
fn conversation_serialization() {
    let conv = Conversation::new();
    let json = serde_json::to_string(&conv).unwrap();
    let deserialized: Conversation = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.id, conv.id);
}

// ─── Settings Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.model, Model::Gpt35);
    assert_eq!(settings.max_tokens, 2048);
    assert_eq!(settings.max_sources_per_query, 3);
}

#[wasm_bindgen_test]
fn model_api_ids() {
    assert_eq!(Model::Gpt35.api_id(), "gpt-3.5");
    assert_eq!(Model::Gpt4.api_id(), "gpt-4");
    assert_eq!(Model::Claude2.api_id(), "claude-2");
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    assert_eq!(
        ChatError::Backend("HTTP 500".to_string()).to_string(),
        "Backend error: HTTP 500"
    );
    assert_eq!(ChatError::Timeout(30000).to_string(), "Timeout after 30000ms");
}

#[wasm_bindgen_test]
fn error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
    let chat_err: ChatError = serde_err.into();
    assert!(matches!(chat_err, ChatError::Serialization(_)));
}
