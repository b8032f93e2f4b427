// --- File: crates/brandforge_stripe/src/error.rs ---
use thiserror::Error;

/// Stripe-specific error types.
///
/// Handlers collapse these into generic HTTP responses (500 on create, 404 on
/// retrieve); the variant detail is logged server-side only and never reaches
/// the caller.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}
