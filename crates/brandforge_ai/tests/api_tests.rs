use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use brandforge_ai::routes::routes;
use brandforge_config::{AppConfig, ServerConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

// Helper to build an AppConfig with no OpenAI credential: every generation
// request deterministically takes the fallback path, so these tests never
// touch the network.
fn config_without_openai() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        frontend_url: "http://localhost:3000".to_string(),
        openai: None,
        stripe: None,
    })
}

async fn post_json(path: &str, body: &str) -> (StatusCode, Value) {
    let app = routes(config_without_openai());
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn generate_website_returns_200_with_full_schema_when_provider_unavailable() {
    let (status, body) = post_json(
        "/generate-website",
        r#"{"business_name": "Acme", "industry": "retail", "tone": "bold"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mock"], true);
    assert_eq!(body["business_name"], "Acme");
    assert!(!body["hero"]["headline"].as_str().unwrap().is_empty());
    assert!(!body["hero"]["subheadline"].as_str().unwrap().is_empty());
    assert!(!body["hero"]["cta"].as_str().unwrap().is_empty());
    assert!(!body["services"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn generate_brand_kit_serves_exact_fallback_table_when_provider_unavailable() {
    let (status, body) = post_json(
        "/generate-brand-kit",
        r#"{"business_name": "Acme"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mock"], true);
    assert_eq!(body["colors"].as_array().unwrap().len(), 4);
    assert_eq!(body["typography"]["heading_font"], "Poppins");
    assert_eq!(body["typography"]["body_font"], "Inter");
    assert_eq!(body["voice"]["dos"].as_array().unwrap().len(), 3);
    assert_eq!(body["voice"]["donts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn generate_logo_returns_three_labelled_variants() {
    let (status, body) = post_json(
        "/generate-logo",
        r#"{"business_name": "Acme", "style": "minimal"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mock"], true);
    assert_eq!(body["business_name"], "Acme");
    let variants = body["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 3);
    for variant in variants {
        assert!(variant["label"].as_str().unwrap().contains("Acme"));
        assert!(variant["preview_url"].as_str().unwrap().starts_with("https://"));
    }
}

#[tokio::test]
async fn generation_requests_without_required_fields_are_rejected() {
    // business_name missing: the one endpoint class that does NOT always-200
    // is malformed input, which never reaches the generation logic.
    let app = routes(config_without_openai());
    let request = Request::builder()
        .method("POST")
        .uri("/generate-website")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"industry": "retail", "tone": "bold"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
