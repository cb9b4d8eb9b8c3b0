//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    generate_content_handler, health_handler, keyword_suggestions_handler, models_handler,
    root_handler, topic_suggestions_handler,
};

/// Front-end dev servers that are always allowed.
const DEV_ORIGINS: [&str; 6] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, extra_origins: &[String]) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    let api = Router::new()
        .route("/content/generate", post(generate_content_handler))
        .route("/suggestions/topics", post(topic_suggestions_handler))
        .route("/suggestions/keywords", post(keyword_suggestions_handler))
        .route("/ai/models", get(models_handler));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api)
        .layer(Extension(app_state))
        .layer(cors_layer(extra_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(extra_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .map(|origin| origin.to_string())
        .chain(extra_origins.iter().cloned())
        .filter(|origin| {
            let wildcard = origin.trim() == "*";
            if wildcard {
                tracing::warn!("Ignoring wildcard CORS origin");
            }
            !wildcard
        })
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
