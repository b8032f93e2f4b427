// --- File: crates/brandforge_ai/src/handlers.rs ---
use axum::{extract::State, response::Json};
use brandforge_config::AppConfig;
use std::sync::Arc;

use crate::logic::{
    generate_brand_kit, generate_website, logo_variants, BrandKitRequest, BrandKitResponse,
    LogoRequest, LogoResponse, WebsiteRequest, WebsiteResponse,
};

// --- State for AI Handlers ---
// Only needs AppConfig as reqwest::Client is static in brandforge_common
#[derive(Clone)]
pub struct AiState {
    pub config: Arc<AppConfig>,
}

// These handlers return plain Json, not a Result: the always-200 contract is
// a property of the return type, not of error-handling convention.

/// Axum handler for `/generate-website`.
#[axum::debug_handler]
pub async fn generate_website_handler(
    State(state): State<Arc<AiState>>,
    Json(payload): Json<WebsiteRequest>,
) -> Json<WebsiteResponse> {
    Json(generate_website(state.config.openai.as_ref(), &payload).await)
}

/// Axum handler for `/generate-brand-kit`.
#[axum::debug_handler]
pub async fn generate_brand_kit_handler(
    State(state): State<Arc<AiState>>,
    Json(payload): Json<BrandKitRequest>,
) -> Json<BrandKitResponse> {
    Json(generate_brand_kit(state.config.openai.as_ref(), &payload).await)
}

/// Axum handler for `/generate-logo`: static variants, no external call.
#[axum::debug_handler]
pub async fn generate_logo_handler(Json(payload): Json<LogoRequest>) -> Json<LogoResponse> {
    Json(LogoResponse {
        mock: true,
        variants: logo_variants(&payload.business_name),
        business_name: payload.business_name,
    })
}
