// Anthropic Messages API client. Each call sends exactly one user message;
// nothing is carried between calls.

use crate::config::toml_config::LlmSettings;
use crate::config::Credentials;
use crate::domain::ports::ChatAssistant;
use crate::utils::error::{PulseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    system: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct AnthropicAssistant {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    system_message: String,
}

impl AnthropicAssistant {
    pub fn new(credentials: &Credentials, settings: &LlmSettings) -> Self {
        Self {
            http: Client::new(),
            endpoint: settings.endpoint.clone(),
            api_key: credentials.llm_api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            system_message: settings.system_message.clone(),
        }
    }
}

#[async_trait]
impl ChatAssistant for AnthropicAssistant {
    async fn generate_reply(&self, prompt: &str) -> Result<String> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: &self.system_message,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PulseError::LlmError {
                message: format!("status {}: {}", status.as_u16(), text),
            });
        }

        let reply: MessagesResponse = response.json().await?;
        Ok(reply
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect())
    }
}
