//! Proxy API port: the two payment endpoints as seen by the checkout
//! orchestrator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::payment::{PaymentConfirmation, PaymentIntent};

/// Port over the order-creation and verification endpoints.
///
/// Implemented by an HTTP client carrying the shared proxy secret; mocked
/// directly in orchestrator tests.
#[async_trait]
pub trait ProxyApi: Send + Sync {
    /// Create a gateway order for an intent.
    async fn create_order(&self, intent: &PaymentIntent) -> Result<CheckoutOrder, ProxyApiError>;

    /// Verify a completed payment and forward its registration.
    async fn verify(&self, confirmation: &PaymentConfirmation) -> Result<(), ProxyApiError>;
}

/// Order details the client needs to open the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Gateway-issued order id.
    pub order_id: String,

    /// Amount in minor units, echoed unchanged from order creation.
    pub amount_minor: u64,

    /// Currency of the order.
    pub currency: String,

    /// Public key id used to open the widget.
    pub key_id: String,
}

/// Errors from the proxy endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyApiError {
    /// Connection failure or timeout before a response arrived.
    #[error("proxy request failed: {0}")]
    Network(String),

    /// The proxy rejected the request; message comes from its error body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The proxy's response body could not be parsed.
    #[error("proxy response could not be parsed: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn ProxyApi) {}
    }

    #[test]
    fn rejection_displays_upstream_message() {
        let err = ProxyApiError::Rejected {
            status: 400,
            message: "Invalid payment signature".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid payment signature");
    }
}
