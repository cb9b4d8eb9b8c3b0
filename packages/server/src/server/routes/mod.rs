// HTTP routes
pub mod content;
pub mod health;
pub mod models;
pub mod suggestions;

pub use content::*;
pub use health::*;
pub use models::*;
pub use suggestions::*;

use axum::http::StatusCode;

use crate::domains::businesses::models::Business;
use crate::kernel::BaseBusinessStore;
use crate::server::app::AppState;

pub type ApiError = (StatusCode, String);

pub(crate) fn internal_error(error: impl std::fmt::Display) -> ApiError {
    tracing::error!(error = %error, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

pub(crate) async fn load_business(state: &AppState, id: i32) -> Result<Business, ApiError> {
    state
        .deps
        .business_store
        .find_business(id)
        .await
        .map_err(internal_error)?
        .ok_or((StatusCode::NOT_FOUND, "Business not found".to_string()))
}
