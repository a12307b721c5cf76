//! Payment gateway port for order creation.
//!
//! The gateway is the external processor that issues orders and collects
//! payment through its embedded widget. This service only ever creates
//! orders; collection and signing happen on the gateway's side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for the payment gateway's orders API.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for the given minor-unit amount.
    ///
    /// Order creation is never retried by callers: a duplicate call would
    /// create a second collectable order.
    async fn create_order(&self, request: CreateOrderRequest) -> Result<GatewayOrder, GatewayError>;
}

/// Request to create a gateway order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in the currency's smallest unit.
    pub amount_minor: u64,

    /// ISO currency code, e.g. `INR`.
    pub currency: String,

    /// Human-traceable receipt id for gateway-side reconciliation.
    pub receipt: String,

    /// Audit metadata attached to the order.
    pub notes: OrderNotes,
}

/// Metadata recorded on the gateway order for audit/reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotes {
    pub event_id: String,
    pub event_name: String,
    pub user_id: String,
    pub participant_email: String,
}

/// An order issued by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-issued order id.
    pub id: String,

    /// Amount echoed back by the gateway, in minor units.
    pub amount_minor: u64,

    /// Currency echoed back by the gateway.
    pub currency: String,
}

/// Errors from the gateway's orders API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Connection failure or timeout before a response arrived.
    #[error("gateway request failed: {0}")]
    Network(String),

    /// The gateway answered with a non-success status.
    #[error("gateway returned HTTP {status}")]
    Api { status: u16, body: String },

    /// The gateway's response body could not be parsed.
    #[error("gateway response could not be parsed: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn order_notes_serialize_snake_case() {
        let notes = OrderNotes {
            event_id: "E1".to_string(),
            event_name: "Fest".to_string(),
            user_id: "U1".to_string(),
            participant_email: "a@b.com".to_string(),
        };
        let json = serde_json::to_value(&notes).unwrap();
        assert_eq!(json["event_id"], "E1");
        assert_eq!(json["participant_email"], "a@b.com");
    }

    #[test]
    fn api_error_displays_status_without_body() {
        let err = GatewayError::Api {
            status: 502,
            body: "internal detail".to_string(),
        };
        let shown = err.to_string();
        assert!(shown.contains("502"));
        assert!(!shown.contains("internal detail"));
    }
}
