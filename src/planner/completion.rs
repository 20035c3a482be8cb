use async_trait::async_trait;
use serde::Serialize;

use super::error::PlannerError;

pub const DEFAULT_MODEL_ID: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single message of the instruction sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Per-request settings handed to the completion service.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model_id: String,
    pub temperature: f32,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            temperature: 0.0,
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Anything that can turn an ordered list of messages into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        config: &CompletionConfig,
    ) -> Result<String, PlannerError>;
}
