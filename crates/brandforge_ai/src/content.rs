// --- File: crates/brandforge_ai/src/content.rs ---
//! Content models for the AI-backed endpoints.
//!
//! Each endpoint has three shapes: a *draft* (what the provider's JSON reply
//! may contain, every recognized field optional), a fully-populated result
//! (what the frontend always receives), and a fixed fallback table used when
//! the provider call or its parsing fails entirely.
//!
//! The merge functions are pure: a draft missing a recognized field gets that
//! field's declared default (empty mapping / empty sequence), never the full
//! fallback table.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Website Content ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Hero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub cta: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Service {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Fully-populated website copy: both the provider and fallback paths
/// produce this same shape.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebsiteContent {
    pub hero: Hero,
    pub services: Vec<Service>,
}

/// The provider's reply as parsed: recognized fields only, all optional.
#[derive(Deserialize, Debug, Default)]
pub struct WebsiteDraft {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
}

/// Per-field default substitution for a successfully parsed reply.
pub fn merge_website_draft(draft: WebsiteDraft) -> WebsiteContent {
    WebsiteContent {
        hero: draft.hero.unwrap_or_default(),
        services: draft.services.unwrap_or_default(),
    }
}

/// The complete hand-authored website copy served when the provider fails.
pub fn fallback_website(business_name: &str) -> WebsiteContent {
    WebsiteContent {
        hero: Hero {
            headline: format!("Launch {business_name} online."),
            subheadline: "BrandForge builds your brand, website, and marketing in minutes."
                .to_string(),
            cta: "Get Started".to_string(),
        },
        services: vec![
            Service {
                title: "AI Website Builder".to_string(),
                description: "Instant, responsive website tailored to your industry and tone."
                    .to_string(),
            },
            Service {
                title: "Branding Engine".to_string(),
                description: "Logos, colors, typography, and messaging all aligned.".to_string(),
            },
        ],
    }
}

// --- Brand Kit Content ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Color {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hex: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Typography {
    #[serde(default)]
    pub heading_font: String,
    #[serde(default)]
    pub body_font: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Voice {
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub dos: Vec<String>,
    #[serde(default)]
    pub donts: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BrandKitContent {
    pub colors: Vec<Color>,
    pub typography: Typography,
    pub voice: Voice,
}

#[derive(Deserialize, Debug, Default)]
pub struct BrandKitDraft {
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default)]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub voice: Option<Voice>,
}

pub fn merge_brand_kit_draft(draft: BrandKitDraft) -> BrandKitContent {
    BrandKitContent {
        colors: draft.colors.unwrap_or_default(),
        typography: draft.typography.unwrap_or_default(),
        voice: draft.voice.unwrap_or_default(),
    }
}

/// The complete hand-authored brand kit served when the provider fails.
/// Palette chosen to work on dark backgrounds.
pub fn fallback_brand_kit() -> BrandKitContent {
    BrandKitContent {
        colors: vec![
            Color {
                name: "Forge Orange".to_string(),
                hex: "#f97316".to_string(),
            },
            Color {
                name: "Deep Charcoal".to_string(),
                hex: "#111827".to_string(),
            },
            Color {
                name: "Soft Gray".to_string(),
                hex: "#6b7280".to_string(),
            },
            Color {
                name: "Highlight Gold".to_string(),
                hex: "#facc15".to_string(),
            },
        ],
        typography: Typography {
            heading_font: "Poppins".to_string(),
            body_font: "Inter".to_string(),
        },
        voice: Voice {
            tone: "Confident, warm, and practical.".to_string(),
            dos: vec![
                "Speak clearly and directly.".to_string(),
                "Highlight speed, automation, and simplicity.".to_string(),
                "Sound like a helpful expert, not a robot.".to_string(),
            ],
            donts: vec![
                "Don’t overuse jargon.".to_string(),
                "Don’t be arrogant or condescending.".to_string(),
            ],
        },
    }
}
