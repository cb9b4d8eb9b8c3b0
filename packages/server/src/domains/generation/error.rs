use thiserror::Error;

/// Failures inside the generation pipeline.
///
/// Only [`GenerationError::ModelUnavailable`] ever leaves the public entry
/// points of [`ContentGenerator`](super::ContentGenerator); every other variant
/// is logged and answered with deterministic fallback content.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Liveness probe against the local inference server failed or timed out
    #[error("Local inference server unreachable: {0}")]
    BackendUnreachable(String),

    /// Local backend was eligible but no model could be resolved for the role
    #[error("No local model available for role '{role}'")]
    ModelUnavailable { role: String },

    /// A live backend call returned an error or an unusable reply
    #[error("{backend} generation failed: {message}")]
    GenerationCallFailed { backend: String, message: String },

    /// Suggestion reply contained no usable numbered items
    #[error("No usable items in suggestion reply")]
    EmptyParseResult,
}
