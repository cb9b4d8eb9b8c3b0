//! REST clients for text-generation model APIs
//!
//! Minimal clients with no domain-specific logic. Each client speaks one wire
//! format and returns the generated text as a plain `String`:
//!
//! - [`OllamaClient`] - a local Ollama inference server (`/api/tags`, `/api/chat`)
//! - [`AnthropicClient`] - the Anthropic messages API (`/v1/messages`)
//! - [`OpenAIClient`] - the OpenAI chat completions API (`/v1/chat/completions`)
//!
//! # Example
//!
//! ```rust,ignore
//! use model_clients::{Message, OllamaChatRequest, OllamaClient};
//! use std::time::Duration;
//!
//! let client = OllamaClient::new("http://localhost:11434");
//! let models = client.list_models(Duration::from_secs(2)).await?;
//!
//! let text = client
//!     .chat(
//!         OllamaChatRequest::new(&models[0])
//!             .message(Message::user("Write a haiku about Rust"))
//!             .num_predict(100),
//!     )
//!     .await?;
//! ```

pub mod anthropic;
pub mod error;
pub mod ollama;
pub mod openai;
pub mod types;

pub use anthropic::{AnthropicClient, MessagesRequest};
pub use error::{ClientError, Result};
pub use ollama::{OllamaChatRequest, OllamaClient, OllamaOptions};
pub use openai::{ChatRequest, ChatResponse, OpenAIClient};
pub use types::*;

/// Read an error body from a non-2xx response and turn it into [`ClientError::Api`].
pub(crate) async fn api_error(provider: &str, response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    tracing::warn!(provider, status, error = %message, "Model API returned an error");
    ClientError::Api { status, message }
}
