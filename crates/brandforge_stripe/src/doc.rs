// --- File: crates/brandforge_stripe/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    CheckoutSessionDetails, CreateCheckoutSessionRequest, CreateCheckoutSessionResponse,
    StripeCheckoutSessionData, StripeCustomerDetails,
};

#[utoipa::path(
    post,
    path = "/create-checkout-session", // Path relative to /api
    request_body(content = CreateCheckoutSessionRequest, example = json!({
        "price_id": "price_1Nxyz...",
        "mode": "subscription",
        "success_path": "/success",
        "cancel_path": "/pricing"
    })),
    responses(
        (status = 200, description = "Stripe Checkout Session created", body = CreateCheckoutSessionResponse),
        (status = 500, description = "Stripe not configured, or session creation failed")
    ),
    tag = "Stripe"
)]
fn doc_create_checkout_session_handler() {}

#[utoipa::path(
    get,
    path = "/checkout-session/{session_id}", // Path relative to /api
    params(("session_id" = String, Path, description = "The ID of the Stripe checkout session (cs_...)")),
    responses(
        (status = 200, description = "Checkout session details for the confirmation page", body = CheckoutSessionDetails),
        (status = 404, description = "Session not found or retrieval failed"),
        (status = 500, description = "Stripe not configured")
    ),
    tag = "Stripe"
)]
fn doc_get_checkout_session_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_create_checkout_session_handler, doc_get_checkout_session_handler),
    components(
        schemas(
            CreateCheckoutSessionRequest,
            CreateCheckoutSessionResponse,
            CheckoutSessionDetails,
            StripeCheckoutSessionData,
            StripeCustomerDetails
        )
    ),
    tags(
        (name = "Stripe", description = "Stripe Checkout Integration API")
    )
)]
pub struct StripeApiDoc;
