//! OpenAI chat completions client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::types::{Message, Usage};

#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4", "gpt-4o-mini")
    pub model: String,

    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Chat completion response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageRaw,
}

#[derive(Debug, Deserialize)]
struct ChatMessageRaw {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config("OpenAI API key is empty".into()));
        }
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                ClientError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(crate::api_error("openai", response).await);
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let content = first_content(raw.choices)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            output_tokens = raw.usage.map(|u| u.completion_tokens).unwrap_or_default(),
            "OpenAI chat completion"
        );

        Ok(ChatResponse { content })
    }
}

fn first_content(choices: Vec<ChatChoice>) -> Result<String> {
    choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| ClientError::Parse("No response content from OpenAI".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://proxy.internal/v1");
        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url(), "https://proxy.internal/v1");
    }

    #[test]
    fn request_omits_unset_sampling_fields() {
        let json = serde_json::to_value(ChatRequest::new("gpt-4").message(Message::user("hi")))
            .unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());

        let json = serde_json::to_value(ChatRequest::new("gpt-4").max_tokens(200).temperature(0.7))
            .unwrap();
        assert_eq!(json["max_tokens"], 200);
    }

    #[test]
    fn null_content_is_a_parse_error() {
        let raw: ChatResponseRaw =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(first_content(raw.choices), Err(ClientError::Parse(_))));
    }

    #[test]
    fn first_choice_wins() {
        let raw: ChatResponseRaw = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"a"}},{"message":{"content":"b"}}],"usage":null}"#,
        )
        .unwrap();
        assert_eq!(first_content(raw.choices).unwrap(), "a");
    }

    #[tokio::test]
    async fn blank_key_is_a_config_error() {
        let err = OpenAIClient::new("  ")
            .chat_completion(ChatRequest::new("gpt-4").message(Message::user("hi")))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
