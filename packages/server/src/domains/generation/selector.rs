//! Per-call backend selection.
//!
//! Priority is fixed: local server (development only, and only when it answers
//! the probe with at least one loaded model), then the primary cloud provider,
//! then the secondary one, then offline copy. Nothing is cached between calls.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::kernel::{BaseAI, BaseLocalInference, GenerationBackends};

use super::capabilities::{GenerationSettings, FALLBACK_ROLES};
use super::error::GenerationError;

/// A local server that passed the liveness probe, with the models it reported.
pub struct LocalBackend {
    pub client: Arc<dyn BaseLocalInference>,
    pub loaded_models: Vec<String>,
}

pub enum SelectedBackend {
    Local(LocalBackend),
    CloudPrimary(Arc<dyn BaseAI>),
    CloudSecondary(Arc<dyn BaseAI>),
    Offline,
}

impl SelectedBackend {
    pub fn name(&self) -> &'static str {
        match self {
            SelectedBackend::Local(_) => "ollama",
            SelectedBackend::CloudPrimary(_) => "anthropic",
            SelectedBackend::CloudSecondary(_) => "openai",
            SelectedBackend::Offline => "offline",
        }
    }
}

pub struct BackendSelector<'a> {
    settings: &'a GenerationSettings,
    backends: &'a GenerationBackends,
}

impl<'a> BackendSelector<'a> {
    pub fn new(settings: &'a GenerationSettings, backends: &'a GenerationBackends) -> Self {
        Self { settings, backends }
    }

    /// Probe the local server. `None` means the local backend is not eligible.
    pub async fn probe_local(&self) -> Option<LocalBackend> {
        if !self.settings.is_local_development() {
            return None;
        }
        let client = self.backends.local.clone()?;

        match client.list_models().await {
            Ok(loaded_models) if !loaded_models.is_empty() => {
                if loaded_models.contains(&self.settings.default_model) {
                    debug!(model = %self.settings.default_model, "Local inference server available");
                } else {
                    warn!(
                        default_model = %self.settings.default_model,
                        available = ?loaded_models,
                        "Local inference server is missing the default model"
                    );
                }
                Some(LocalBackend {
                    client,
                    loaded_models,
                })
            }
            Ok(_) => {
                warn!("Local inference server has no models loaded");
                None
            }
            Err(e) => {
                let error = GenerationError::BackendUnreachable(e.to_string());
                warn!(error = %error, "Skipping local inference");
                None
            }
        }
    }

    pub async fn select(&self) -> SelectedBackend {
        if let Some(local) = self.probe_local().await {
            return SelectedBackend::Local(local);
        }
        if let Some(primary) = &self.backends.cloud_primary {
            return SelectedBackend::CloudPrimary(primary.clone());
        }
        if let Some(secondary) = &self.backends.cloud_secondary {
            return SelectedBackend::CloudSecondary(secondary.clone());
        }
        SelectedBackend::Offline
    }
}

/// Pick a loaded model for `role`.
///
/// Order: the role's model, then the generic fallback roles, then whatever is
/// loaded first. Fails only when nothing is loaded.
pub fn resolve_model(
    settings: &GenerationSettings,
    role: &str,
    loaded_models: &[String],
) -> Result<String, GenerationError> {
    let is_loaded = |model: &str| loaded_models.iter().any(|m| m == model);

    let preferred = settings.model_for_role(role);
    if is_loaded(preferred) {
        return Ok(preferred.to_string());
    }

    for fallback_role in FALLBACK_ROLES {
        if let Some(model) = settings.models.get(fallback_role).filter(|m| is_loaded(*m)) {
            warn!(preferred = %preferred, fallback = %model, "Preferred model not loaded");
            return Ok(model.to_string());
        }
    }

    match loaded_models.first() {
        Some(model) => {
            warn!(preferred = %preferred, fallback = %model, "Using first loaded model");
            Ok(model.clone())
        }
        None => Err(GenerationError::ModelUnavailable {
            role: role.to_string(),
        }),
    }
}
