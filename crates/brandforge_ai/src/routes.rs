// --- File: crates/brandforge_ai/src/routes.rs ---

use crate::handlers::{
    generate_brand_kit_handler, generate_logo_handler, generate_website_handler, AiState,
};
use axum::{routing::post, Router};
use brandforge_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the AI generation feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let ai_state = Arc::new(AiState { config });

    Router::new()
        .route("/generate-logo", post(generate_logo_handler))
        .route("/generate-website", post(generate_website_handler))
        .route("/generate-brand-kit", post(generate_brand_kit_handler))
        .with_state(ai_state)
}
