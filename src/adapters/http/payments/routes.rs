//! Axum router for the payment proxy endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_order, verify_payment, PaymentsAppState};

/// Create the payment proxy router.
///
/// # Routes
///
/// - `POST /create-order` - create a gateway order for a payment intent
/// - `POST /verify` - verify a completed payment and forward its registration
///
/// Both routes are guarded by the authorization gate (trusted origin or
/// shared secret) inside their handlers.
pub fn payments_routes() -> Router<PaymentsAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify", post(verify_payment))
}
