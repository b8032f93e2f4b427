// --- File: crates/brandforge_stripe/src/logic.rs ---
use brandforge_config::StripeConfig;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// Import the StripeError from the error module
use crate::error::StripeError;

// Import the HTTP client from brandforge_common
use brandforge_common::HTTP_CLIENT;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

// Stripe substitutes the real session id for this token in the success URL.
const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

// --- Data Structures ---

/// Request from our frontend to create a Stripe Checkout Session.
#[derive(Deserialize, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCheckoutSessionRequest {
    /// Provider-assigned price identifier (price_...).
    #[cfg_attr(feature = "openapi", schema(example = "price_1Nxyz..."))]
    pub price_id: String,
    /// Checkout mode, "subscription" or "payment".
    #[serde(default = "default_mode")]
    #[cfg_attr(feature = "openapi", schema(example = "subscription"))]
    pub mode: String,
    /// Frontend path the user lands on after paying.
    #[serde(default = "default_success_path")]
    #[cfg_attr(feature = "openapi", schema(example = "/success"))]
    pub success_path: String,
    /// Frontend path the user lands on after cancelling.
    #[serde(default = "default_cancel_path")]
    #[cfg_attr(feature = "openapi", schema(example = "/pricing"))]
    pub cancel_path: String,
}

fn default_mode() -> String {
    "subscription".to_string()
}

fn default_success_path() -> String {
    "/success".to_string()
}

fn default_cancel_path() -> String {
    "/pricing".to_string()
}

/// Response to our frontend after session creation.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCheckoutSessionResponse {
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://checkout.stripe.com/pay/cs_test_a1...")
    )]
    pub checkout_url: String,
}

// Response FROM Stripe API when creating a session
#[derive(Deserialize, Debug)]
struct StripeCheckoutSessionApiResponse {
    #[allow(dead_code)]
    pub id: String,
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StripeCustomerDetails {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

// Response FROM Stripe API when retrieving a session
#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StripeCheckoutSessionData {
    pub id: String,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub mode: Option<String>,
    pub customer_details: Option<StripeCustomerDetails>,
}

/// Projection of a checkout session returned to our frontend, e.g. for the
/// /success confirmation page.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutSessionDetails {
    pub id: String,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub customer_email: Option<String>,
    pub mode: Option<String>,
}

// --- Core Logic Functions ---

/// Builds the absolute success and cancel redirect URLs.
///
/// The session-id placeholder is embedded in the success URL only; Stripe
/// replaces it when redirecting the customer back.
pub fn build_redirect_urls(
    frontend_url: &str,
    success_path: &str,
    cancel_path: &str,
) -> (String, String) {
    let base = frontend_url.trim_end_matches('/');
    let success_url = format!("{base}{success_path}?session_id={SESSION_ID_PLACEHOLDER}");
    let cancel_url = format!("{base}{cancel_path}");
    (success_url, cancel_url)
}

/// Creates a Stripe Checkout Session with a single line item.
pub async fn create_checkout_session(
    stripe_config: &StripeConfig,
    frontend_url: &str,
    request_data: CreateCheckoutSessionRequest,
) -> Result<CreateCheckoutSessionResponse, StripeError> {
    info!(
        "[Stripe Logic] Creating Checkout Session for price: {} (mode: {})",
        request_data.price_id, request_data.mode
    );

    let (success_url, cancel_url) = build_redirect_urls(
        frontend_url,
        &request_data.success_path,
        &request_data.cancel_path,
    );

    let form_body: Vec<(String, String)> = vec![
        ("mode".to_string(), request_data.mode),
        ("success_url".to_string(), success_url),
        ("cancel_url".to_string(), cancel_url),
        ("line_items[0][price]".to_string(), request_data.price_id),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
    ];

    let api_url = format!("{STRIPE_API_BASE}/checkout/sessions");

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(&stripe_config.secret_key, None::<&str>)
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let stripe_response: StripeCheckoutSessionApiResponse = serde_json::from_str(&body_text)?;
        if let Some(url) = stripe_response.url {
            info!("[Stripe Logic] Checkout Session created successfully.");
            Ok(CreateCheckoutSessionResponse { checkout_url: url })
        } else {
            error!(
                "[Stripe Logic] Stripe response missing checkout session URL: {}",
                body_text
            );
            Err(StripeError::InternalError(
                "Stripe response missing checkout URL".to_string(),
            ))
        }
    } else {
        let error_message = extract_stripe_error_message(&body_text);
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

/// Retrieves a Checkout Session and projects it for the frontend.
///
/// `customer_email` comes from the nested `customer_details` object, which is
/// absent when Stripe did not collect customer details; that case must not
/// fail, it simply yields `null`.
pub async fn get_checkout_session(
    stripe_config: &StripeConfig,
    session_id: &str,
) -> Result<CheckoutSessionDetails, StripeError> {
    info!(
        "[Stripe Logic] Retrieving Checkout Session details for ID: {}",
        session_id
    );

    let api_url = format!("{STRIPE_API_BASE}/checkout/sessions/{session_id}");

    let response = HTTP_CLIENT
        .get(&api_url)
        .basic_auth(&stripe_config.secret_key, None::<&str>)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let session: StripeCheckoutSessionData = serde_json::from_str(&body_text)?;
        Ok(CheckoutSessionDetails {
            customer_email: session.customer_details.and_then(|details| details.email),
            id: session.id,
            amount_total: session.amount_total,
            currency: session.currency,
            status: session.status,
            mode: session.mode,
        })
    } else {
        let error_message = extract_stripe_error_message(&body_text);
        error!(
            "[Stripe Logic] Failed to retrieve session {}: {} - {}",
            session_id, status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

/// Pulls `error.message` out of a Stripe error body, falling back to the raw
/// body when it isn't the expected JSON shape.
fn extract_stripe_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}
