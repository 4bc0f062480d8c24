//! Port traits — the boundary between core logic and the browser.
//!
//! The backend trait is defined here in `kbchat-core` (pure Rust).
//! The HTTP implementation lives in `kbchat-platform`. The core never
//! imports platform code; it only depends on this trait.

use async_trait::async_trait;
use serde::Serialize;
use kbchat_types::{message::Source, settings::Settings, Result};

/// One outbound question to the remote question-answering service.
/// Serialized as the JSON body of the POST request.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub query: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub similarity_threshold: f32,
    pub max_sources: u32,
}

impl AskRequest {
    /// Build a request from the trimmed user input and the current settings
    pub fn new(query: impl Into<String>, settings: &Settings) -> Self {
        Self {
            query: query.into(),
            model: settings.model.api_id().to_string(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            system_prompt: settings.system_prompt.clone(),
            similarity_threshold: settings.similarity_threshold,
            max_sources: settings.max_sources_per_query,
        }
    }
}

/// A well-formed answer from the remote service, before parsing.
/// `content` may contain paired `<think>` delimiters.
#[derive(Debug, Clone)]
pub struct AskReply {
    pub content: String,
    pub sources: Vec<Source>,
}

#[async_trait(?Send)]
pub trait AskPort {
    /// Send one question and await the complete answer
    async fn ask(&self, req: AskRequest) -> Result<AskReply>;
}
