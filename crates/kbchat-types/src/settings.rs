use serde::{Deserialize, Serialize};

/// Backend parameters configured through the settings panel.
/// Read by the send controller when building each request;
/// not persisted across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub model: Model,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub similarity_threshold: f32,
    /// Clamped to [1, 10] by the editing control
    pub max_sources_per_query: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: Model::Gpt35,
            temperature: 0.7,
            max_tokens: 2048,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            similarity_threshold: 0.7,
            max_sources_per_query: 3,
        }
    }
}

/// Supported backend model identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    Gpt35,
    Gpt4,
    Claude2,
}

impl Model {
    /// Identifier sent over the wire
    pub fn api_id(&self) -> &str {
        match self {
            Model::Gpt35 => "gpt-3.5",
            Model::Gpt4 => "gpt-4",
            Model::Claude2 => "claude-2",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Model::Gpt35 => "GPT-3.5",
            Model::Gpt4 => "GPT-4",
            Model::Claude2 => "Claude 2",
        }
    }

    pub fn all() -> &'static [Model] {
        &[Model::Gpt35, Model::Gpt4, Model::Claude2]
    }
}

const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant that answers questions based on the provided knowledge base.";
