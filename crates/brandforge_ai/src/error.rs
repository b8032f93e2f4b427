// --- File: crates/brandforge_ai/src/error.rs ---
use thiserror::Error;

/// Errors from the text-generation provider call or its response handling.
///
/// None of these ever reach an HTTP caller: every variant is absorbed by the
/// fallback path in `logic.rs`, which substitutes the complete per-endpoint
/// fallback table and tags the response with `mock: true`.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Error occurred during the OpenAI API request (includes timeouts)
    #[error("OpenAI API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the OpenAI API
    #[error("OpenAI API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing the OpenAI API response or the reply JSON
    #[error("Failed to parse OpenAI response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete OpenAI configuration
    #[error("OpenAI configuration missing or incomplete")]
    ConfigError,

    /// The completion response contained no choices
    #[error("OpenAI response contained no choices")]
    EmptyCompletion,
}
