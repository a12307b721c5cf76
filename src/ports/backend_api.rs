//! Backend API port for the subscription proxy.
//!
//! The Continuum backend owns subscriptions and usage data; this service
//! forwards the caller's bearer token and passes responses through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port over the backend's subscription endpoints.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Create a checkout session for the authenticated user.
    ///
    /// Returns the backend's JSON response verbatim.
    async fn create_checkout(
        &self,
        access_token: &str,
        request: &SubscriptionCheckoutRequest,
    ) -> Result<serde_json::Value, BackendApiError>;

    /// Export usage for the last `days` days as CSV.
    async fn export_usage(&self, access_token: &str, days: u32) -> Result<String, BackendApiError>;
}

/// Checkout request forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCheckoutRequest {
    pub tier: String,
    pub billing_interval: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// Errors from the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendApiError {
    /// Connection failure or timeout before a response arrived.
    #[error("backend request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status; passed through.
    #[error("backend returned HTTP {status}")]
    Upstream { status: u16, body: String },
}
