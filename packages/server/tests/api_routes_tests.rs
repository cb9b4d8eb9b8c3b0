//! HTTP surface driven in-process through the router.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{acme_business, get, numbered_reply, post_json, ACME_ID};
use content_core::domains::content::models::{ContentKind, ContentStatus};
use content_core::kernel::test_dependencies::MockLocalInference;
use content_core::kernel::TestDependencies;
use content_core::server::build_app;

fn test_deps() -> TestDependencies {
    TestDependencies::new().with_business(acme_business())
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = build_app(test_deps().deps(), &[]);

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn wildcard_cors_origin_is_skipped() {
    let origins = ["*".to_string(), "https://app.example.com".to_string()];
    let app = build_app(test_deps().deps(), &origins);

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
}

#[tokio::test]
async fn generate_stores_pending_content() {
    let deps = test_deps();
    let app = build_app(deps.deps(), &[]);

    let (status, body) = post_json(
        app,
        "/api/v1/content/generate",
        json!({
            "business_id": ACME_ID,
            "content_type": "linkedin_post",
            "topic": "Cobots on the warehouse floor",
            "keywords": ["automation", "robots"],
            "campaign_id": 7
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending_approval");
    assert_eq!(body["content_type"], "linkedin_post");
    assert_eq!(body["ai_model_used"], "mock-content");
    assert_eq!(body["campaign_id"], 7);

    let stored = deps.content_store.inserted();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].business_id, ACME_ID);
    assert_eq!(stored[0].content_type, ContentKind::LinkedinPost);
    assert_eq!(stored[0].status, ContentStatus::PendingApproval);
    assert_eq!(stored[0].keywords, vec!["automation", "robots"]);
    assert!(stored[0].requires_approval);
}

#[tokio::test]
async fn generate_for_unknown_business_is_not_found() {
    let deps = test_deps();
    let app = build_app(deps.deps(), &[]);

    let (status, _) = post_json(
        app,
        "/api/v1/content/generate",
        json!({ "business_id": 999, "content_type": "blog_post" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(deps.content_store.inserted().is_empty());
}

#[tokio::test]
async fn generate_rejects_unknown_content_type() {
    let app = build_app(test_deps().deps(), &[]);

    let (status, _) = post_json(
        app,
        "/api/v1/content/generate",
        json!({ "business_id": ACME_ID, "content_type": "newsletter" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn topic_suggestions_accept_unknown_labels() {
    let app = build_app(test_deps().deps(), &[]);

    let (status, body) = post_json(
        app,
        "/api/v1/suggestions/topics",
        json!({ "business_id": ACME_ID, "content_type": "newsletter" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0], "5 Essential Technology Tips for Beginners");
}

#[tokio::test]
async fn keyword_suggestions_come_from_local_model() {
    let local = MockLocalInference::with_models(&["llama3.2:3b"])
        .with_response(numbered_reply(12, "keyword"));
    let deps = test_deps().mock_local(local.clone());
    let app = build_app(deps.deps(), &[]);

    let (status, body) = post_json(
        app,
        "/api/v1/suggestions/keywords",
        json!({
            "business_id": ACME_ID,
            "content_type": "blog_post",
            "topic": "Cobots"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 10);
    assert!(local.last_request().unwrap().prompt.contains("- Topic: Cobots"));
}

#[tokio::test]
async fn suggestions_for_unknown_business_are_not_found() {
    let app = build_app(test_deps().deps(), &[]);

    let (status, _) = post_json(
        app,
        "/api/v1/suggestions/keywords",
        json!({ "business_id": 42, "content_type": "blog_post" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn models_endpoint_lists_configuration() {
    let app = build_app(test_deps().deps(), &[]);

    let (status, body) = get(app, "/api/v1/ai/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["environment"], "development");
    assert_eq!(body["default_model"], "llama3.2:3b");
    assert_eq!(body["models"]["blog_post"], "phi3:3.8b");
    assert_eq!(body["model_info"]["llama3.1:8b"]["speed"], "Medium");
}
