// --- File: crates/brandforge_ai/src/prompts.rs ---
//! Prompt builders for the generation endpoints.
//!
//! Pure, total functions of the validated request: prompt construction has no
//! failure mode, so the fallback contract only has to cover the provider call
//! and its parsing.

use crate::logic::{BrandKitRequest, WebsiteRequest};

/// System and user instructions for one website-copy generation call.
pub fn website_prompt(request: &WebsiteRequest) -> (String, String) {
    let system = "You are an expert SaaS landing page and small business website copywriter. \
        Return STRICT JSON with keys: hero, services. \
        hero: {\"headline\",\"subheadline\",\"cta\"}. \
        services: list of {\"title\",\"description\"}."
        .to_string();

    let user = format!(
        "Create website content for a business.\n\n\
        Business name: \"{}\"\n\
        Industry: {}\n\
        Tone of voice: {}\n\n\
        Focus on clarity, conversion, and simplicity.",
        request.business_name, request.industry, request.tone
    );

    (system, user)
}

/// System and user instructions for one brand-kit generation call.
pub fn brand_kit_prompt(request: &BrandKitRequest) -> (String, String) {
    let keywords = if request.brand_keywords.is_empty() {
        "modern, clean, professional".to_string()
    } else {
        request.brand_keywords.join(", ")
    };
    let tagline = request
        .tagline
        .as_deref()
        .unwrap_or("Powered by BrandForge");

    let system = "You are a senior brand strategist. \
        Return STRICT JSON with keys: colors, typography, voice. \
        colors is a list of {name, hex}. \
        typography has heading_font, body_font. \
        voice has tone, dos, donts (lists of strings)."
        .to_string();

    let user = format!(
        "Create a brand kit for a business.\n\n\
        Name: \"{}\"\n\
        Tagline: \"{}\"\n\
        Keywords: {}\n\n\
        The palette should work well on dark backgrounds.",
        request.business_name, tagline, keywords
    );

    (system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_prompt_carries_all_request_fields() {
        let request = WebsiteRequest {
            business_name: "Acme Plumbing".to_string(),
            industry: "home services".to_string(),
            tone: "friendly".to_string(),
        };
        let (system, user) = website_prompt(&request);

        assert!(system.contains("STRICT JSON"));
        assert!(user.contains("Acme Plumbing"));
        assert!(user.contains("home services"));
        assert!(user.contains("friendly"));
    }

    #[test]
    fn brand_kit_prompt_defaults_keywords_and_tagline() {
        let request = BrandKitRequest {
            business_name: "Acme".to_string(),
            tagline: None,
            brand_keywords: vec![],
        };
        let (_, user) = brand_kit_prompt(&request);

        assert!(user.contains("modern, clean, professional"));
        assert!(user.contains("Powered by BrandForge"));
    }

    #[test]
    fn brand_kit_prompt_joins_given_keywords() {
        let request = BrandKitRequest {
            business_name: "Acme".to_string(),
            tagline: Some("Built to last".to_string()),
            brand_keywords: vec!["bold".to_string(), "rugged".to_string()],
        };
        let (_, user) = brand_kit_prompt(&request);

        assert!(user.contains("bold, rugged"));
        assert!(user.contains("Built to last"));
    }
}
