//! Wire types for the Razorpay orders API.

use serde::{Deserialize, Serialize};

use crate::ports::{CreateOrderRequest, OrderNotes};

/// Body of `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayOrderRequest {
    /// Amount in minor units (paise for INR).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    pub notes: OrderNotes,
}

impl From<CreateOrderRequest> for RazorpayOrderRequest {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            amount: request.amount_minor,
            currency: request.currency,
            receipt: request.receipt,
            notes: request.notes,
        }
    }
}

/// The subset of the order response this service consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrderResponse {
    pub id: String,
    pub amount: u64,
    pub currency: String,
}
