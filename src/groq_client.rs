use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::planner::{ChatMessage, CompletionClient, CompletionConfig, PlannerError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::CompletionService(err.to_string())
    }
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    base_url: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        config: &CompletionConfig,
    ) -> Result<String, PlannerError> {
        let request_body = json!({
            "model": config.model_id,
            "messages": messages,
            "temperature": config.temperature,
        });

        debug!(
            "Sending request to Groq API: {}",
            serde_json::to_string_pretty(&request_body).unwrap_or_default()
        );

        let response = self.client.post(self.endpoint())
            .bearer_auth(&config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API request failed with status {}: {}", status, error_text);

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    PlannerError::Credential(format!("{}: {}", status, error_text))
                }
                _ => PlannerError::CompletionService(format!("{}: {}", status, error_text)),
            });
        }

        let response_json: Value = response.json().await?;

        debug!("Received response from Groq API: {}", response_json);

        extract_content(&response_json).ok_or_else(|| {
            error!("Response did not contain choices[0].message.content");
            PlannerError::CompletionService(
                "malformed response: missing message content".to_string(),
            )
        })
    }
}

fn extract_content(response: &Value) -> Option<String> {
    response
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
