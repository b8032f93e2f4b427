// --- File: crates/brandforge_ai/src/lib.rs ---

pub mod client;
pub mod content;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod prompts;
pub mod routes;

// Re-export for main backend
pub use error::GenerationError;
pub use handlers::AiState;
pub use logic::{BrandKitRequest, BrandKitResponse, LogoRequest, WebsiteRequest, WebsiteResponse};
pub use routes::routes;
