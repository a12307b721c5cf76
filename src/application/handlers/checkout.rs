//! CheckoutOrchestrator - drives one pass of the client checkout flow.
//!
//! The flow mirrors what the checkout page does in the browser: create an
//! order through the proxy, hand it to the gateway's widget, and verify the
//! completion. Each call to [`CheckoutOrchestrator::run`] is one pass from
//! `idle`; the caller's "try again" affordance is simply another call,
//! which re-runs everything including re-verifying the same signature.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::checkout::{CheckoutEvent, CheckoutFlow, CheckoutState, InvalidTransition};
use crate::domain::payment::{PaymentConfirmation, PaymentIntent};
use crate::ports::{PaymentWidget, ProxyApi, WidgetOutcome};

/// Everything the flow needs, typically taken from checkout URL parameters.
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    pub intent: PaymentIntent,
    /// Where to send the user after success.
    pub return_url: Option<String>,
    pub team: Option<Value>,
    pub team_name: Option<Value>,
    pub member_emails: Option<Value>,
    pub additional_info: Option<Value>,
}

impl CheckoutParams {
    pub fn new(intent: PaymentIntent) -> Self {
        Self {
            intent,
            return_url: None,
            team: None,
            team_name: None,
            member_emails: None,
            additional_info: None,
        }
    }
}

/// Where a pass of the flow ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub state: CheckoutState,
    /// Failure message when the pass ended in `Failed`.
    pub error: Option<String>,
    /// Return URL to navigate to; set only on success.
    pub redirect_url: Option<String>,
}

/// Orchestrator for the checkout flow.
pub struct CheckoutOrchestrator {
    proxy: Arc<dyn ProxyApi>,
    widget: Arc<dyn PaymentWidget>,
}

impl CheckoutOrchestrator {
    pub fn new(proxy: Arc<dyn ProxyApi>, widget: Arc<dyn PaymentWidget>) -> Self {
        Self { proxy, widget }
    }

    /// Run one pass of the flow from `idle`.
    ///
    /// Terminates in `Success`, `Failed`, or back in `Idle` when the user
    /// dismissed the widget. The state machine makes a concurrent second
    /// pass on the same flow impossible; each call gets a fresh flow.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] only if the flow definition and this
    /// driver disagree, which is a bug rather than a runtime condition.
    pub async fn run(&self, params: &CheckoutParams) -> Result<CheckoutOutcome, InvalidTransition> {
        let mut flow = CheckoutFlow::new();
        flow.handle(CheckoutEvent::Begin, None)?;
        tracing::debug!(event_id = params.intent.event_id(), "creating order");

        let order = match self.proxy.create_order(&params.intent).await {
            Ok(order) => order,
            Err(e) => {
                flow.handle(CheckoutEvent::OrderFailed, Some(e.to_string()))?;
                return Ok(outcome(&flow, None));
            }
        };
        flow.handle(CheckoutEvent::OrderCreated, None)?;
        tracing::debug!(order_id = %order.order_id, "collecting payment");

        let completion = match self.widget.collect(&order, &params.intent).await {
            Ok(WidgetOutcome::Completed(completion)) => completion,
            Ok(WidgetOutcome::Dismissed) => {
                flow.handle(CheckoutEvent::WidgetDismissed, None)?;
                return Ok(outcome(&flow, None));
            }
            Err(e) => {
                flow.handle(CheckoutEvent::VerificationFailed, Some(e.to_string()))?;
                return Ok(outcome(&flow, None));
            }
        };

        let confirmation = PaymentConfirmation::new(
            completion.order_id,
            completion.payment_id,
            completion.signature,
            params.intent.event_id(),
            params.intent.event_name(),
            params.intent.amount(),
            params.intent.payer_user_id(),
        );
        let confirmation = match confirmation {
            Ok(confirmation) => confirmation
                .with_team(params.team.clone())
                .with_team_name(params.team_name.clone())
                .with_member_emails(params.member_emails.clone())
                .with_additional_info(params.additional_info.clone()),
            Err(e) => {
                flow.handle(CheckoutEvent::VerificationFailed, Some(e.to_string()))?;
                return Ok(outcome(&flow, None));
            }
        };

        match self.proxy.verify(&confirmation).await {
            Ok(()) => {
                flow.handle(CheckoutEvent::Verified, None)?;
                tracing::info!(order_id = confirmation.order_id(), "checkout complete");
                Ok(outcome(&flow, params.return_url.clone()))
            }
            Err(e) => {
                flow.handle(CheckoutEvent::VerificationFailed, Some(e.to_string()))?;
                Ok(outcome(&flow, None))
            }
        }
    }
}

fn outcome(flow: &CheckoutFlow, redirect_url: Option<String>) -> CheckoutOutcome {
    CheckoutOutcome {
        state: flow.state(),
        error: flow.error().map(str::to_string),
        redirect_url,
    }
}
