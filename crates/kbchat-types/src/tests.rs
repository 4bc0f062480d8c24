#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::conversation::*;
    use crate::settings::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert_eq!(msg.status, MessageStatus::Sending);
        assert!(msg.sources.is_empty());
        assert!(msg.think.is_none());
        assert!(!msg.id.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_assistant_pending() {
        let msg = Message::assistant_pending();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, PENDING_REPLY_TEXT);
        assert_eq!(msg.status, MessageStatus::Sending);
    }

    #[test]
    fn test_message_assistant_reply() {
        let sources = vec![Source {
            title: "Doc 1".to_string(),
            content: "snippet".to_string(),
            similarity: 0.92,
        }];
        let msg = Message::assistant_reply("answer", sources, Some("reasoning".to_string()));
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.status, MessageStatus::Sent);
        assert_eq!(msg.content, "answer");
        assert_eq!(msg.sources.len(), 1);
        assert_eq!(msg.think.as_deref(), Some("reasoning"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::User);
        assert_eq!(deserialized.content, "test input");
        assert_eq!(deserialized.status, MessageStatus::Sending);
    }

    #[test]
    fn test_message_skips_empty_optional_fields() {
        let msg = Message::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sources"));
        assert!(!json.contains("think"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&MessageStatus::Sending).unwrap(), r#""sending""#);
        assert_eq!(serde_json::to_string(&MessageStatus::Sent).unwrap(), r#""sent""#);
        assert_eq!(serde_json::to_string(&MessageStatus::Error).unwrap(), r#""error""#);
    }

    #[test]
    fn test_source_deserialization() {
        let json = r#"{"title":"Doc","content":"text","similarity":0.85}"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.title, "Doc");
        assert!((source.similarity - 0.85).abs() < f32::EPSILON);
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_new() {
        let conv = Conversation::new();
        assert_eq!(conv.title, DEFAULT_TITLE);
        assert!(conv.messages.is_empty());
        assert!(!conv.id.is_empty());
        assert!(!conv.timestamp.is_empty());
    }

    #[test]
    fn test_conversation_ids_are_unique() {
        assert_ne!(Conversation::new().id, Conversation::new().id);
    }

    #[test]
    fn test_conversation_serialization() {
        let mut conv = Conversation::new();
        conv.messages.push(Message::user("hello"));
        let json = serde_json::to_string(&conv).unwrap();
        let deserialized: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, conv.id);
        assert_eq!(deserialized.messages.len(), 1);
    }

    // ─── Settings Tests ──────────────────────────────────────

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.model, Model::Gpt35);
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.max_tokens, 2048);
        assert!((settings.similarity_threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.max_sources_per_query, 3);
        assert!(!settings.system_prompt.is_empty());
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.model, Model::Gpt35);
        assert_eq!(deserialized.max_tokens, 2048);
    }

    #[test]
    fn test_model_api_ids() {
        assert_eq!(Model::Gpt35.api_id(), "gpt-3.5");
        assert_eq!(Model::Gpt4.api_id(), "gpt-4");
        assert_eq!(Model::Claude2.api_id(), "claude-2");
    }

    #[test]
    fn test_model_labels() {
        assert_eq!(Model::Gpt35.label(), "GPT-3.5");
        assert_eq!(Model::Gpt4.label(), "GPT-4");
        assert_eq!(Model::Claude2.label(), "Claude 2");
    }

    #[test]
    fn test_model_all() {
        let all = Model::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Model::Gpt35));
        assert!(all.contains(&Model::Claude2));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ChatError::Backend("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Backend error: HTTP 500");

        let err = ChatError::Timeout(30000);
        assert_eq!(err.to_string(), "Timeout after 30000ms");
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let chat_err: ChatError = serde_err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Network("timeout".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
