use axum::{extract::Extension, Json};
use serde::Deserialize;

use super::{internal_error, load_business, ApiError};
use crate::domains::content::models::{Content, ContentKind, NewContent};
use crate::kernel::BaseContentStore;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    pub business_id: i32,
    pub content_type: ContentKind,
    pub topic: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub campaign_id: Option<i32>,
}

/// Generate a draft for a business and store it pending approval.
///
/// An unknown `content_type` is rejected by the JSON extractor with 422.
pub async fn generate_content_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<Content>, ApiError> {
    let business = load_business(&state, request.business_id).await?;

    let result = state
        .deps
        .generator
        .generate_content(
            &business.context(),
            request.content_type,
            request.topic.as_deref(),
            &request.keywords,
        )
        .await
        .map_err(internal_error)?;

    let content = state
        .deps
        .content_store
        .insert_content(NewContent::from_generation(result, request.campaign_id))
        .await
        .map_err(internal_error)?;

    tracing::info!(
        content_id = content.id,
        business_id = content.business_id,
        "Stored generated content"
    );

    Ok(Json(content))
}
