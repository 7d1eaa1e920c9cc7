//! Hosted chat-completions client (OpenAI-compatible wire format).

use crate::error::LlmError;
use crate::generator::TextGenerator;
use async_trait::async_trait;
use log::{debug, warn};
use parley_config::ModelConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Generation parameters are fixed at construction from config. A single
/// request is made per call: no retry, no streaming, transport-default
/// timeout only.
pub struct NvidiaChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

impl NvidiaChatClient {
    /// Build a client from config and an API key.
    ///
    /// Fails fast with [`LlmError::MissingCredentials`] when no key is
    /// supplied, so a misconfigured deployment is tagged at construction
    /// rather than on the first turn.
    pub fn new(config: &ModelConfig, api_key: Option<String>) -> Result<Self, LlmError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(LlmError::MissingCredentials),
        };
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model_name.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for NvidiaChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
        };

        debug!(
            "requesting completion (model={}, prompt_chars={})",
            self.model,
            prompt.len()
        );
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = truncate(&message, 512);
            warn!("endpoint rejected request (status={status}, body={message})");
            return Err(LlmError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        Ok(content)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text[..cut].to_string()
}

#[cfg(test)]
mod tests {
    use super::{NvidiaChatClient, truncate};
    use crate::error::LlmError;
    use parley_config::ModelConfig;

    #[test]
    fn missing_key_fails_at_construction() {
        let config = ModelConfig::default();
        assert!(matches!(
            NvidiaChatClient::new(&config, None),
            Err(LlmError::MissingCredentials)
        ));
        assert!(matches!(
            NvidiaChatClient::new(&config, Some("   ".to_string())),
            Err(LlmError::MissingCredentials)
        ));
        assert!(NvidiaChatClient::new(&config, Some("nvapi-1".to_string())).is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = ModelConfig {
            base_url: "https://example.test/v1/".to_string(),
            ..ModelConfig::default()
        };
        let client =
            NvidiaChatClient::new(&config, Some("key".to_string())).expect("client");
        assert_eq!(client.base_url, "https://example.test/v1");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        let text = "héllo wörld";
        let cut = truncate(text, 2);
        assert!(text.starts_with(&cut));
    }
}
