// --- File: crates/brandforge_ai/src/logic.rs ---
use brandforge_config::OpenAiConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::complete_json;
use crate::content::{
    fallback_brand_kit, fallback_website, merge_brand_kit_draft, merge_website_draft,
    BrandKitDraft, Color, Hero, Service, Typography, Voice, WebsiteDraft,
};
use crate::error::GenerationError;
use crate::prompts::{brand_kit_prompt, website_prompt};

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---

/// Request from our frontend to generate website copy.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WebsiteRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Acme Plumbing"))]
    pub business_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "home services"))]
    pub industry: String,
    #[cfg_attr(feature = "openapi", schema(example = "friendly"))]
    pub tone: String,
}

/// Request from our frontend to generate a brand kit.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BrandKitRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Acme Plumbing"))]
    pub business_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Pipes done right"))]
    pub tagline: Option<String>,
    #[serde(default)]
    pub brand_keywords: Vec<String>,
}

/// Request from our frontend for placeholder logo variants.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LogoRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Acme Plumbing"))]
    pub business_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "minimal"))]
    pub style: String,
}

/// Response body for `/generate-website`. The field schema is identical on
/// the provider-sourced and fallback paths; only `mock` differs.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WebsiteResponse {
    pub mock: bool,
    pub business_name: String,
    pub hero: Hero,
    pub services: Vec<Service>,
}

/// Response body for `/generate-brand-kit`.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BrandKitResponse {
    pub mock: bool,
    pub business_name: String,
    pub colors: Vec<Color>,
    pub typography: Typography,
    pub voice: Voice,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LogoVariant {
    pub label: String,
    pub preview_url: String,
}

/// Response body for `/generate-logo`. Always `mock: true`: this endpoint
/// makes no external call.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LogoResponse {
    pub mock: bool,
    pub business_name: String,
    pub variants: Vec<LogoVariant>,
}

// --- Core Logic Functions ---

// The fallback contract: each generation runs as a Result-shaped pipeline
// (call provider, parse draft) and the public function maps Ok through the
// pure merge and Err through the complete fallback table. The HTTP layer
// never sees an error from these functions.

async fn website_draft(
    config: &OpenAiConfig,
    request: &WebsiteRequest,
) -> Result<WebsiteDraft, GenerationError> {
    let (system, user) = website_prompt(request);
    let raw = complete_json(config, &config.website_model, &system, &user).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn brand_kit_draft(
    config: &OpenAiConfig,
    request: &BrandKitRequest,
) -> Result<BrandKitDraft, GenerationError> {
    let (system, user) = brand_kit_prompt(request);
    let raw = complete_json(config, &config.brand_kit_model, &system, &user).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Generates website copy, degrading to the fallback table on any provider
/// failure. Always produces a fully-shaped response.
pub async fn generate_website(
    config: Option<&OpenAiConfig>,
    request: &WebsiteRequest,
) -> WebsiteResponse {
    let outcome = match config {
        Some(config) => website_draft(config, request).await,
        None => Err(GenerationError::ConfigError),
    };

    match outcome {
        Ok(draft) => {
            let content = merge_website_draft(draft);
            info!(
                "[AI Logic] Website copy generated for '{}'",
                request.business_name
            );
            WebsiteResponse {
                mock: false,
                business_name: request.business_name.clone(),
                hero: content.hero,
                services: content.services,
            }
        }
        Err(err) => {
            warn!(
                "[AI Logic] Website generation for '{}' failed, serving fallback content: {}",
                request.business_name, err
            );
            let content = fallback_website(&request.business_name);
            WebsiteResponse {
                mock: true,
                business_name: request.business_name.clone(),
                hero: content.hero,
                services: content.services,
            }
        }
    }
}

/// Generates a brand kit, degrading to the fallback table on any provider
/// failure. Always produces a fully-shaped response.
pub async fn generate_brand_kit(
    config: Option<&OpenAiConfig>,
    request: &BrandKitRequest,
) -> BrandKitResponse {
    let outcome = match config {
        Some(config) => brand_kit_draft(config, request).await,
        None => Err(GenerationError::ConfigError),
    };

    match outcome {
        Ok(draft) => {
            let kit = merge_brand_kit_draft(draft);
            info!(
                "[AI Logic] Brand kit generated for '{}'",
                request.business_name
            );
            BrandKitResponse {
                mock: false,
                business_name: request.business_name.clone(),
                colors: kit.colors,
                typography: kit.typography,
                voice: kit.voice,
            }
        }
        Err(err) => {
            warn!(
                "[AI Logic] Brand kit generation for '{}' failed, serving fallback content: {}",
                request.business_name, err
            );
            let kit = fallback_brand_kit();
            BrandKitResponse {
                mock: true,
                business_name: request.business_name.clone(),
                colors: kit.colors,
                typography: kit.typography,
                voice: kit.voice,
            }
        }
    }
}

/// Builds the three static placeholder logo variants. No external call; this
/// endpoint cannot fail from provider-side causes.
pub fn logo_variants(business_name: &str) -> Vec<LogoVariant> {
    vec![
        LogoVariant {
            label: format!("{business_name} – Orb Gradient"),
            preview_url: "https://placehold.co/400x400/f97316/ffffff?text=Orb".to_string(),
        },
        LogoVariant {
            label: format!("{business_name} – Minimal Dark"),
            preview_url: "https://placehold.co/400x400/111827/eeeeee?text=Minimal".to_string(),
        },
        LogoVariant {
            label: format!("{business_name} – Gold Accent"),
            preview_url: "https://placehold.co/400x400/facc15/111827?text=Gold".to_string(),
        },
    ]
}
