//! Logging utilities for the BrandForge application.
//!
//! Provides a standardized way to initialize the tracing subscriber across
//! binaries and tests.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// Call once at the start of the application. `RUST_LOG` still takes
/// precedence through the env filter.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("brandforge={}", level).parse().unwrap());

    // try_init so tests that initialize logging repeatedly don't panic
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
