//! HTTP DTOs for the payment proxy endpoints.
//!
//! Request fields are optional at the wire level so that missing fields
//! surface as the proxy's own "Missing required fields" 400 instead of a
//! deserialization rejection. The same types serve the outbound
//! [`crate::adapters::client::ProxyClient`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /ev/create-order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub amount: Option<f64>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<String>,
}

/// Response of `POST /ev/create-order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// Gateway-issued order id.
    pub id: String,
    /// Amount in minor units, echoed from the gateway.
    pub amount: u64,
    pub currency: String,
    /// Public key id the client uses to open the widget.
    pub key_id: String,
}

/// Body of `POST /ev/verify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyBody {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub amount: Option<f64>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub team: Option<Value>,
    #[serde(default)]
    pub team_name: Option<Value>,
    #[serde(default)]
    pub member_emails: Option<Value>,
    #[serde(default)]
    pub additional_info: Option<Value>,
}

/// Response of `POST /ev/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
}

/// Standard error body: a short message, no internal detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
