// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompting, backend selection and fallback live in domains/generation.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseContentStore)

use anyhow::Result;
use async_trait::async_trait;

use super::llm_request::CompletionRequest;
use crate::domains::businesses::models::Business;
use crate::domains::content::models::{Content, NewContent};

// =============================================================================
// AI Traits (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Run a completion and return the raw text reply
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// A local inference server that can also report which models it has loaded.
#[async_trait]
pub trait BaseLocalInference: BaseAI {
    /// Liveness probe. Implementations must bound this with a short timeout.
    async fn list_models(&self) -> Result<Vec<String>>;
}

// =============================================================================
// Store Traits (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseBusinessStore: Send + Sync {
    async fn find_business(&self, id: i32) -> Result<Option<Business>>;
}

#[async_trait]
pub trait BaseContentStore: Send + Sync {
    async fn insert_content(&self, content: NewContent) -> Result<Content>;
}
