use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{config::Config, errors::GenerationError};

/// The external text-generation capability: one prompt in, free text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Talks to any OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatCompletionsGenerator {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}/chat/completions",
                config.generation_api_base_url.trim_end_matches('/')
            ),
            api_key: config.generation_api_key.clone(),
            model: config.generation_model.clone(),
            max_tokens: config.generation_max_tokens,
            temperature: config.generation_temperature,
            top_p: config.generation_top_p,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "top_p": self.top_p,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl QuizGenerator for ChatCompletionsGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        log::debug!("Requesting quiz generation from {} ({})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
