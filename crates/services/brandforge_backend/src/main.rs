// File: services/brandforge_backend/src/main.rs
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use brandforge_ai::routes as ai_routes;
use brandforge_config::{load_config, AppConfig};
use brandforge_stripe::routes as stripe_routes;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    backend: &'static str,
    ai: bool,
    stripe: bool,
}

/// Liveness probe, also tells the frontend which integrations have
/// credentials configured.
#[axum::debug_handler]
async fn health_handler(State(config): State<Arc<AppConfig>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: "running",
        ai: config.openai.is_some(),
        stripe: config.stripe.is_some(),
    })
}

fn cors_layer() -> CorsLayer {
    // The frontend dev server; credentials stay allowed, so origins must be
    // listed explicitly rather than using Any.
    CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

fn app(config: Arc<AppConfig>) -> Router {
    let health_router = Router::new()
        .route("/health", get(health_handler))
        .with_state(config.clone());

    let api_router = Router::new()
        .merge(ai_routes::routes(config.clone()))
        .merge(stripe_routes::routes(config));

    #[allow(unused_mut)] // mutable only when the openapi feature merges Swagger UI
    let mut app = health_router
        .nest("/api", api_router)
        .layer(cors_layer());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use brandforge_ai::doc::AiApiDoc;
        use brandforge_stripe::doc::StripeApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "BrandForge API",
                version = "0.1.0",
                description = "BrandForge Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "BrandForge", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AiApiDoc::openapi());
        openapi_doc.merge(StripeApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    app
}

#[tokio::main]
async fn main() {
    brandforge_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    info!(
        ai = config.openai.is_some(),
        stripe = config.stripe.is_some(),
        frontend_url = %config.frontend_url,
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app(config);

    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use brandforge_config::{OpenAiConfig, ServerConfig, StripeConfig};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_config(ai: bool, stripe: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            frontend_url: "http://localhost:3000".to_string(),
            openai: ai.then(|| OpenAiConfig {
                api_key: "sk-test".to_string(),
                website_model: "gpt-4.1".to_string(),
                brand_kit_model: "gpt-4.1-mini".to_string(),
            }),
            stripe: stripe.then(|| StripeConfig {
                secret_key: "sk_test_123".to_string(),
            }),
        })
    }

    #[tokio::test]
    async fn health_reports_integration_flags() {
        let response = app(test_config(true, false))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "running");
        assert_eq!(body["ai"], true);
        assert_eq!(body["stripe"], false);
    }

    #[tokio::test]
    async fn generation_routes_are_nested_under_api() {
        let response = app(test_config(false, false))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-logo")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"business_name": "Acme", "style": "bold"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
