// AI adapters over the model-clients crate
//
// Infrastructure implementations of BaseAI / BaseLocalInference.
// Which adapter runs for a given request is decided in domains/generation.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use model_clients::{
    AnthropicClient, ChatRequest, Message, MessagesRequest, OllamaChatRequest, OllamaClient,
    OpenAIClient,
};

use super::{BaseAI, BaseLocalInference, CompletionRequest};

/// Upper bound on the liveness probe against the local server.
pub const LOCAL_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

fn messages(request: &CompletionRequest) -> Vec<Message> {
    request
        .system
        .iter()
        .map(|s| Message::system(s.as_str()))
        .chain(std::iter::once(Message::user(request.prompt.as_str())))
        .collect()
}

// =============================================================================
// Ollama (local inference, development only)
// =============================================================================

#[derive(Clone)]
pub struct OllamaAdapter {
    client: OllamaClient,
    probe_timeout: Duration,
}

impl OllamaAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: OllamaClient::new(base_url),
            probe_timeout: LOCAL_PROBE_TIMEOUT,
        }
    }
}

#[async_trait]
impl BaseAI for OllamaAdapter {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let mut chat = OllamaChatRequest::new(request.model.as_str())
            .num_predict(request.max_tokens)
            .temperature(request.temperature);
        if let Some(top_p) = request.top_p {
            chat = chat.top_p(top_p);
        }
        for message in messages(&request) {
            chat = chat.message(message);
        }

        self.client
            .chat(chat)
            .await
            .with_context(|| format!("Ollama chat failed for model {}", request.model))
    }
}

#[async_trait]
impl BaseLocalInference for OllamaAdapter {
    async fn list_models(&self) -> Result<Vec<String>> {
        self.client
            .list_models(self.probe_timeout)
            .await
            .context("Ollama liveness probe failed")
    }
}

// =============================================================================
// Anthropic (cloud primary)
// =============================================================================

#[derive(Clone)]
pub struct AnthropicAdapter {
    client: AnthropicClient,
}

impl AnthropicAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: AnthropicClient::new(api_key),
        }
    }
}

#[async_trait]
impl BaseAI for AnthropicAdapter {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let mut body = MessagesRequest::new(request.model.as_str(), request.max_tokens)
            .temperature(request.temperature);
        for message in messages(&request) {
            body = body.message(message);
        }

        self.client
            .messages(body)
            .await
            .context("Anthropic completion failed")
    }
}

// =============================================================================
// OpenAI (cloud secondary)
// =============================================================================

#[derive(Clone)]
pub struct OpenAiAdapter {
    client: OpenAIClient,
}

impl OpenAiAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
        }
    }
}

#[async_trait]
impl BaseAI for OpenAiAdapter {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let mut chat = ChatRequest::new(request.model.as_str())
            .max_tokens(request.max_tokens)
            .temperature(request.temperature);
        for message in messages(&request) {
            chat = chat.message(message);
        }

        let response = self
            .client
            .chat_completion(chat)
            .await
            .context("OpenAI completion failed")?;

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_precedes_prompt() {
        let request = CompletionRequest::new("m", "Write a tweet").system("No preamble");
        let messages = messages(&request);

        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_system());
        assert_eq!(messages[1].content, "Write a tweet");
    }

    #[test]
    fn prompt_alone_without_system() {
        let messages = messages(&CompletionRequest::new("m", "hi"));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[tokio::test]
    async fn probe_against_closed_port_fails() {
        let adapter = OllamaAdapter::new("http://127.0.0.1:9");
        assert!(adapter.list_models().await.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires API key
    async fn anthropic_complete() {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .expect("ANTHROPIC_API_KEY must be set for integration tests");

        let response = AnthropicAdapter::new(api_key)
            .complete(
                CompletionRequest::new(
                    "claude-3-sonnet-20240229",
                    "Say 'Hello, World!' and nothing else.",
                )
                .max_tokens(20),
            )
            .await
            .expect("Anthropic completion should succeed");

        assert!(response.contains("Hello"));
    }

    #[tokio::test]
    #[ignore] // Requires a running Ollama server
    async fn ollama_lists_models() {
        let models = OllamaAdapter::new("http://localhost:11434")
            .list_models()
            .await
            .expect("Ollama should answer the probe");

        assert!(!models.is_empty());
    }
}
