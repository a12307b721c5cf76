//! Payment widget port: the gateway's embedded collection step.
//!
//! In the browser this is the gateway's modal; the checkout orchestrator
//! only cares that the step eventually reports a completion (with the
//! signed identifiers) or a dismissal.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::PaymentIntent;

use super::proxy_api::CheckoutOrder;

/// Port for the gateway's payment collection widget.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Open the widget for an order and wait for the outcome.
    async fn collect(
        &self,
        order: &CheckoutOrder,
        intent: &PaymentIntent,
    ) -> Result<WidgetOutcome, WidgetError>;
}

/// Result of a widget session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// Payment collected; identifiers and signature reported.
    Completed(WidgetCompletion),

    /// User closed the widget without paying.
    Dismissed,
}

/// Identifiers the widget reports on successful collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetCompletion {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// The widget failed to open or crashed mid-session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payment widget failed: {0}")]
pub struct WidgetError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_widget_is_object_safe() {
        fn _accepts_dyn(_widget: &dyn PaymentWidget) {}
    }
}
