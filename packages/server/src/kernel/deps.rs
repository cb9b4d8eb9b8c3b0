//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by every route.
//! All external services sit behind trait abstractions so tests can swap them.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::domains::generation::ContentGenerator;
use crate::kernel::{
    AnthropicAdapter, BaseAI, BaseBusinessStore, BaseContentStore, BaseLocalInference,
    OllamaAdapter, OpenAiAdapter, PgStore,
};

// =============================================================================
// GenerationBackends
// =============================================================================

/// The live backends available to the generation domain.
///
/// A cloud slot is filled only when its credential is configured.
#[derive(Clone, Default)]
pub struct GenerationBackends {
    pub local: Option<Arc<dyn BaseLocalInference>>,
    pub cloud_primary: Option<Arc<dyn BaseAI>>,
    pub cloud_secondary: Option<Arc<dyn BaseAI>>,
}

impl GenerationBackends {
    pub fn from_config(config: &Config) -> Self {
        let local = config.is_local_development().then(|| {
            info!(base_url = %config.ollama_base_url, "Local inference enabled");
            Arc::new(OllamaAdapter::new(config.ollama_base_url.as_str()))
                as Arc<dyn BaseLocalInference>
        });

        let cloud_primary = config.anthropic_api_key.as_deref().map(|key| {
            info!(model = %config.anthropic_model, "Anthropic backend configured");
            Arc::new(AnthropicAdapter::new(key)) as Arc<dyn BaseAI>
        });

        let cloud_secondary = config.openai_api_key.as_deref().map(|key| {
            info!(model = %config.openai_model, "OpenAI backend configured");
            Arc::new(OpenAiAdapter::new(key)) as Arc<dyn BaseAI>
        });

        if cloud_primary.is_none() && cloud_secondary.is_none() {
            info!("No cloud AI credentials configured");
        }

        Self {
            local,
            cloud_primary,
            cloud_secondary,
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub generator: ContentGenerator,
    pub business_store: Arc<dyn BaseBusinessStore>,
    pub content_store: Arc<dyn BaseContentStore>,
}

impl ServerDeps {
    pub fn new(
        generator: ContentGenerator,
        business_store: Arc<dyn BaseBusinessStore>,
        content_store: Arc<dyn BaseContentStore>,
    ) -> Self {
        Self {
            generator,
            business_store,
            content_store,
        }
    }

    /// Production wiring: Postgres stores plus adapters built from config.
    pub fn from_config(config: &Config, db_pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(db_pool));
        let generator = ContentGenerator::new(
            config.generation_settings(),
            GenerationBackends::from_config(config),
        );
        Self::new(generator, store.clone(), store)
    }
}
