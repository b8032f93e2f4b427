// --- File: crates/brandforge_ai/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::content::{Color, Hero, Service, Typography, Voice};
use crate::logic::{
    BrandKitRequest, BrandKitResponse, LogoRequest, LogoResponse, LogoVariant, WebsiteRequest,
    WebsiteResponse,
};

#[utoipa::path(
    post,
    path = "/generate-logo", // Path relative to /api
    request_body = LogoRequest,
    responses(
        (status = 200, description = "Three static placeholder logo variants", body = LogoResponse),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Generation"
)]
fn doc_generate_logo_handler() {}

#[utoipa::path(
    post,
    path = "/generate-website", // Path relative to /api
    request_body = WebsiteRequest,
    responses(
        // Always 200: provider failures degrade to fallback content (mock: true)
        (status = 200, description = "Website copy, provider-sourced or fallback", body = WebsiteResponse),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Generation"
)]
fn doc_generate_website_handler() {}

#[utoipa::path(
    post,
    path = "/generate-brand-kit", // Path relative to /api
    request_body = BrandKitRequest,
    responses(
        (status = 200, description = "Brand kit, provider-sourced or fallback", body = BrandKitResponse),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Generation"
)]
fn doc_generate_brand_kit_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_generate_logo_handler,
        doc_generate_website_handler,
        doc_generate_brand_kit_handler
    ),
    components(
        schemas(
            LogoRequest, LogoResponse, LogoVariant,
            WebsiteRequest, WebsiteResponse, Hero, Service,
            BrandKitRequest, BrandKitResponse, Color, Typography, Voice
        )
    ),
    tags(
        (name = "Generation", description = "AI-backed content generation (always returns 200)")
    )
)]
pub struct AiApiDoc;
