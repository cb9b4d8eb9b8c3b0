use std::collections::BTreeMap;

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::domains::generation::{
    DeploymentEnvironment, ModelCapabilityTable, ModelInfo, MODEL_INFO,
};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub environment: DeploymentEnvironment,
    pub default_model: String,
    pub models: ModelCapabilityTable,
    pub model_info: BTreeMap<&'static str, ModelInfo>,
}

/// Configured local models. Informational; nothing here is probed.
pub async fn models_handler(Extension(state): Extension<AppState>) -> Json<ModelsResponse> {
    let settings = state.deps.generator.settings();

    Json(ModelsResponse {
        environment: settings.environment,
        default_model: settings.default_model.clone(),
        models: settings.models.clone(),
        model_info: MODEL_INFO.iter().map(|info| (info.model, *info)).collect(),
    })
}
