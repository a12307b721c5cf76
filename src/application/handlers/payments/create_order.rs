//! CreateOrderHandler - command handler for gateway order creation.

use std::sync::Arc;

use crate::domain::payment::{PaymentIntent, PaymentProxyError};
use crate::ports::{CreateOrderRequest, GatewayOrder, OrderNotes, PaymentGateway};

/// Command to create a gateway order for a payment intent.
///
/// Fields mirror the wire body: absent values are `None` and surface as
/// missing-field errors during validation.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderCommand {
    pub amount: Option<f64>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<String>,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: GatewayOrder,
    /// Public key id the client needs to open the widget.
    pub key_id: String,
}

/// Handler for creating gateway orders.
///
/// Validation happens before any gateway call, and a failed call is never
/// retried — a duplicate would create a second collectable order.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
    key_id: String,
    currency: String,
}

impl CreateOrderHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        key_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            key_id: key_id.into(),
            currency: currency.into(),
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, PaymentProxyError> {
        // 1. Validate into a payment intent
        let amount = cmd.amount.ok_or_else(|| PaymentProxyError::missing("amount"))?;
        let intent = PaymentIntent::new(
            amount,
            cmd.event_id.unwrap_or_default(),
            cmd.event_name.unwrap_or_default(),
            cmd.email.unwrap_or_default(),
            cmd.user_id.unwrap_or_default(),
        )?;

        // 2. Build the gateway request with audit metadata
        let request = CreateOrderRequest {
            amount_minor: intent.amount_minor(),
            currency: self.currency.clone(),
            receipt: intent.receipt_id(),
            notes: OrderNotes {
                event_id: intent.event_id().to_string(),
                event_name: intent.event_name().to_string(),
                user_id: intent.payer_user_id().to_string(),
                participant_email: intent.payer_email().to_string(),
            },
        };

        // 3. Create the order
        let order = self.gateway.create_order(request).await.map_err(|e| {
            tracing::error!(error = %e, event_id = intent.event_id(), "order creation failed");
            PaymentProxyError::OrderCreationFailed
        })?;

        Ok(CreateOrderResult {
            order,
            key_id: self.key_id.clone(),
        })
    }
}
