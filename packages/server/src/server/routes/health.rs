use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
}

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI SEO Platform API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
