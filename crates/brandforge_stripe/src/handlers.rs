// --- File: crates/brandforge_stripe/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use brandforge_config::AppConfig;
use std::sync::Arc;
use tracing::error;

use crate::error::StripeError;
use crate::logic::{
    create_checkout_session, get_checkout_session, CheckoutSessionDetails,
    CreateCheckoutSessionRequest, CreateCheckoutSessionResponse,
};

// --- State for Stripe Handlers ---
// Only needs AppConfig as reqwest::Client is static in brandforge_common
#[derive(Clone)]
pub struct StripeState {
    pub config: Arc<AppConfig>,
}

// Error bodies are deliberately generic: the underlying Stripe error is
// logged server-side and never surfaced to the caller.

/// Axum handler to create a Stripe Checkout Session.
#[axum::debug_handler]
pub async fn create_checkout_session_handler(
    State(state): State<Arc<StripeState>>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> Result<Json<CreateCheckoutSessionResponse>, (StatusCode, String)> {
    let Some(stripe_config) = state.config.stripe.as_ref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Stripe is not configured".to_string(),
        ));
    };

    match create_checkout_session(stripe_config, &state.config.frontend_url, payload).await {
        Ok(response) => Ok(Json(response)),
        Err(StripeError::ConfigError) => {
            error!("Stripe configuration error.");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Stripe is not configured".to_string(),
            ))
        }
        Err(err) => {
            error!("Stripe checkout error: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create checkout session".to_string(),
            ))
        }
    }
}

/// Axum handler to retrieve a Checkout Session, used by the /success page to
/// show confirmation.
#[axum::debug_handler]
pub async fn get_checkout_session_handler(
    State(state): State<Arc<StripeState>>,
    Path(session_id): Path<String>,
) -> Result<Json<CheckoutSessionDetails>, (StatusCode, String)> {
    let Some(stripe_config) = state.config.stripe.as_ref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Stripe is not configured".to_string(),
        ));
    };

    match get_checkout_session(stripe_config, &session_id).await {
        Ok(details) => Ok(Json(details)),
        // All retrieval failures, "not found" included, collapse to one
        // caller-visible kind.
        Err(err) => {
            error!("Stripe session fetch error for {session_id}: {err}");
            Err((StatusCode::NOT_FOUND, "Session not found".to_string()))
        }
    }
}
