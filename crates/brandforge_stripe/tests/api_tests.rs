use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use brandforge_config::{AppConfig, ServerConfig};
use brandforge_stripe::routes::routes;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

// Helper to build an AppConfig with no Stripe credential. With billing
// unconfigured both endpoints must reject before any outbound call, so these
// tests never touch the network.
fn config_without_stripe() -> Arc<AppConfig> {
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

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn create_session_without_credential_returns_500_regardless_of_body() {
    let app = routes(config_without_stripe());
    let request = Request::builder()
        .method("POST")
        .uri("/create-checkout-session")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"price_id": "price_123", "mode": "payment"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Stripe is not configured");
}

#[tokio::test]
async fn get_session_without_credential_returns_500() {
    let app = routes(config_without_stripe());
    let request = Request::builder()
        .method("GET")
        .uri("/checkout-session/cs_test_does_not_exist")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Generic body only, no provider error text
    let body = body_string(response).await;
    assert_eq!(body, "Stripe is not configured");
}

#[tokio::test]
async fn create_session_without_price_id_is_rejected_before_any_call() {
    let app = routes(config_without_stripe());
    let request = Request::builder()
        .method("POST")
        .uri("/create-checkout-session")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"mode": "payment"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
