//! Generation domain - AI drafting of marketing content.
//!
//! Flow: prompt → backend selection → live call or offline copy → cleanup →
//! SEO metadata → `GenerationResult` (status pending approval).
//!
//! Persistence is the caller's job; nothing here touches the database.

pub mod capabilities;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod orchestrator;
pub mod prompts;
pub mod selector;
pub mod seo;
pub mod types;

pub use capabilities::{
    DeploymentEnvironment, GenerationSettings, ModelCapabilityTable, ModelInfo, MODEL_INFO,
    OFFLINE_MODEL_ID,
};
pub use error::GenerationError;
pub use orchestrator::ContentGenerator;
pub use selector::{BackendSelector, SelectedBackend};
pub use types::{
    BusinessContext, GenerationParams, GenerationResult, SuggestionHints, SuggestionMode,
};
