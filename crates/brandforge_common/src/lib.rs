// --- File: crates/brandforge_common/src/lib.rs ---

// Declare modules within this crate
pub mod http; // Shared HTTP client
pub mod logging; // Logging utilities

// Re-export the static client for easier access
pub use http::client::{create_client, HTTP_CLIENT};

// Re-export logging init for the backend binary
pub use logging::{init, init_with_level};
