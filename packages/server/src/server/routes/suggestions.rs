use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use super::{internal_error, load_business, ApiError};
use crate::domains::content::models::ContentKind;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct TopicSuggestionsRequest {
    pub business_id: i32,
    /// Free text; unknown labels are treated as a blog post
    pub content_type: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordSuggestionsRequest {
    pub business_id: i32,
    pub content_type: String,
    pub category: Option<String>,
    pub topic: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

pub async fn topic_suggestions_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<TopicSuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let business = load_business(&state, request.business_id).await?;

    let suggestions = state
        .deps
        .generator
        .generate_topic_suggestions(
            &business.context(),
            ContentKind::from_label_or_default(&request.content_type),
            request.category.as_deref(),
            request.description.as_deref(),
        )
        .await
        .map_err(internal_error)?;

    Ok(Json(SuggestionsResponse { suggestions }))
}

pub async fn keyword_suggestions_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<KeywordSuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let business = load_business(&state, request.business_id).await?;

    let suggestions = state
        .deps
        .generator
        .generate_keyword_suggestions(
            &business.context(),
            ContentKind::from_label_or_default(&request.content_type),
            request.category.as_deref(),
            request.topic.as_deref(),
            request.description.as_deref(),
        )
        .await
        .map_err(internal_error)?;

    Ok(Json(SuggestionsResponse { suggestions }))
}
