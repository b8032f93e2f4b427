// --- File: crates/brandforge_stripe/src/routes.rs ---

use crate::handlers::{create_checkout_session_handler, get_checkout_session_handler, StripeState};
use axum::{
    routing::{get, post},
    Router,
};
use brandforge_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the Stripe feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let stripe_state = Arc::new(StripeState { config });

    Router::new()
        .route(
            "/create-checkout-session",
            post(create_checkout_session_handler),
        )
        .route("/checkout-session/{session_id}", get(get_checkout_session_handler))
        .with_state(stripe_state)
}
