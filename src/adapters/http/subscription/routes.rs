//! Axum router for the subscription proxy endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_checkout, export_usage, SubscriptionAppState};

/// Create the subscription proxy router.
///
/// # Routes
///
/// - `POST /checkout` - create a checkout session for the bearer of the token
/// - `GET /usage/export` - export usage for the last N days as CSV
pub fn subscription_routes() -> Router<SubscriptionAppState> {
    Router::new()
        .route("/checkout", post(create_checkout))
        .route("/usage/export", get(export_usage))
}
