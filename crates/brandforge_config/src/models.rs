// --- File: crates/brandforge_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- OpenAI Config ---
// Holds the text-generation credentials and the model pinned per endpoint.
// The api_key is loaded from the OPENAI_API_KEY env var, never from files.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Model used for website copy generation.
    #[serde(default = "default_website_model")]
    pub website_model: String,
    /// Model used for brand kit generation.
    #[serde(default = "default_brand_kit_model")]
    pub brand_kit_model: String,
}

pub fn default_website_model() -> String {
    "gpt-4.1".to_string()
}

pub fn default_brand_kit_model() -> String {
    "gpt-4.1-mini".to_string()
}

// --- Stripe Config ---
// Secret key loaded from the STRIPE_SECRET_KEY env var, never from files.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    /// Base URL of the frontend, used to build checkout redirect URLs.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    // --- Optional Integration Configurations ---
    // An integration is enabled iff its config (i.e. its credential) is present.
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
    #[serde(default)]
    pub stripe: Option<StripeConfig>,
}

pub fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}
