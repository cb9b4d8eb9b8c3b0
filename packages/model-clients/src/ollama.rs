//! Ollama local inference server client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::Message;

/// Client for an Ollama server.
///
/// Holds no per-request state; clone freely.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    base_url: String,
}

/// Sampling options understood by `/api/chat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OllamaOptions {
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// Non-streaming chat request.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub options: OllamaOptions,
}

impl OllamaChatRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            stream: false,
            options: OllamaOptions::default(),
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn num_predict(mut self, num_predict: u32) -> Self {
        self.options.num_predict = Some(num_predict);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.options.top_p = Some(top_p);
        self
    }
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    message: ChatMessageRaw,
}

#[derive(Debug, Deserialize)]
struct ChatMessageRaw {
    content: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the names of locally installed models.
    ///
    /// Doubles as a liveness probe: `timeout` bounds the whole round-trip.
    pub async fn list_models(&self, timeout: Duration) -> Result<Vec<String>> {
        let response = self
            .http_client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::api_error("ollama", response).await);
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Run a single non-streaming chat completion and return the reply text.
    pub async fn chat(&self, request: OllamaChatRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::api_error("ollama", response).await);
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Ollama chat completion"
        );

        Ok(raw.message.content)
    }
}
