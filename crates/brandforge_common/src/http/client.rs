// --- File: crates/brandforge_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A static HTTP client shared by all outbound provider calls.
///
/// The timeout doubles as the upper bound on how long an AI-backed endpoint
/// can stall before its fallback path kicks in: a hung provider call surfaces
/// as a timeout error rather than hanging the request forever.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
});

/// Creates a new HTTP client with a custom timeout.
///
/// Used by tests and by callers that need a shorter deadline than the
/// shared client's default.
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_client_builds_with_short_timeout() {
        assert!(create_client(1).is_ok());
    }

    #[test]
    fn shared_client_initializes() {
        // Forces the Lazy cell; a misconfigured builder would panic here
        // instead of at first request time.
        let _ = &*HTTP_CLIENT;
    }
}
