//! Anthropic messages API client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::types::{Message, Usage};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

/// Request body for `/v1/messages`.
///
/// The messages API takes the system instruction as a top-level field, so
/// system-role entries passed to [`MessagesRequest::message`] are folded into it.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub messages: Vec<Message>,
}

impl MessagesRequest {
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature: None,
            system: None,
            messages: Vec::new(),
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        if message.is_system() {
            self.system = Some(match self.system.take() {
                Some(existing) => format!("{}\n\n{}", existing, message.content),
                None => message.content,
            });
        } else {
            self.messages.push(message);
        }
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponseRaw {
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a messages request and return the concatenated text blocks.
    pub async fn messages(&self, request: MessagesRequest) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config("Anthropic API key is empty".into()));
        }
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                ClientError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(crate::api_error("anthropic", response).await);
        }

        let raw: MessagesResponseRaw = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let text = collect_text(raw.content)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            output_tokens = raw.usage.map(|u| u.completion_tokens).unwrap_or_default(),
            "Anthropic messages completion"
        );

        Ok(text)
    }
}

fn collect_text(blocks: Vec<ContentBlock>) -> Result<String> {
    let parts: Vec<String> = blocks
        .into_iter()
        .filter(|b| b.block_type == "text")
        .filter_map(|b| b.text)
        .collect();

    if parts.is_empty() {
        return Err(ClientError::Parse("No text content from Anthropic".into()));
    }
    Ok(parts.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_move_to_top_level_field() {
        let request = MessagesRequest::new("claude-3-sonnet-20240229", 400)
            .message(Message::system("no preamble"))
            .message(Message::user("write a post"))
            .temperature(0.7);

        assert_eq!(request.system.as_deref(), Some("no preamble"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 400);
        assert_eq!(json["system"], "no preamble");
    }

    #[test]
    fn request_without_system_omits_field() {
        let json =
            serde_json::to_value(MessagesRequest::new("m", 10).message(Message::user("x"))).unwrap();
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn text_blocks_are_joined_and_others_skipped() {
        let raw: MessagesResponseRaw = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"Hello "},{"type":"tool_use","id":"x"},{"type":"text","text":"world"}],
                "usage":{"input_tokens":3,"output_tokens":2}}"#,
        )
        .unwrap();
        assert_eq!(raw.usage.as_ref().unwrap().completion_tokens, 2);
        assert_eq!(collect_text(raw.content).unwrap(), "Hello world");
    }

    #[test]
    fn empty_content_is_a_parse_error() {
        assert!(matches!(collect_text(vec![]), Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn blank_key_is_a_config_error() {
        let err = AnthropicClient::new("")
            .messages(MessagesRequest::new("m", 10).message(Message::user("hi")))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
