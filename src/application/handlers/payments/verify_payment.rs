//! VerifyPaymentHandler - command handler for payment verification and
//! registration forwarding.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::payment::{PaymentConfirmation, PaymentProxyError, SignatureVerifier};
use crate::ports::RegistrationSink;

/// Command to verify a completed payment and forward its registration.
///
/// Fields mirror the wire body: absent values are `None` and surface as
/// missing-field errors during validation.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub amount: Option<f64>,
    pub user_id: Option<String>,
    pub team: Option<Value>,
    pub team_name: Option<Value>,
    pub member_emails: Option<Value>,
    pub additional_info: Option<Value>,
}

/// Handler for payment verification.
///
/// The signature check is the sole integrity proof that the payment
/// completed under this gateway credential; it always uses the server-held
/// secret. Forwarding is single-shot — a failed forward after a verified
/// payment is surfaced as an error and left to the caller's retry.
pub struct VerifyPaymentHandler {
    verifier: Arc<SignatureVerifier>,
    sink: Option<Arc<dyn RegistrationSink>>,
}

impl VerifyPaymentHandler {
    pub fn new(verifier: Arc<SignatureVerifier>, sink: Option<Arc<dyn RegistrationSink>>) -> Self {
        Self { verifier, sink }
    }

    pub async fn handle(&self, cmd: VerifyPaymentCommand) -> Result<(), PaymentProxyError> {
        // 1. Validate into a confirmation
        let amount = cmd.amount.ok_or_else(|| PaymentProxyError::missing("amount"))?;
        let confirmation = PaymentConfirmation::new(
            cmd.order_id.unwrap_or_default(),
            cmd.payment_id.unwrap_or_default(),
            cmd.signature.unwrap_or_default(),
            cmd.event_id.unwrap_or_default(),
            cmd.event_name.unwrap_or_default(),
            amount,
            cmd.user_id.unwrap_or_default(),
        )?
        .with_team(cmd.team)
        .with_team_name(cmd.team_name)
        .with_member_emails(cmd.member_emails)
        .with_additional_info(cmd.additional_info);

        // 2. Verify the signature against the server-held secret
        self.verifier.verify(
            confirmation.order_id(),
            confirmation.payment_id(),
            confirmation.signature(),
        )?;

        // 3. Forward the registration; signature validity alone is not success
        let sink = self
            .sink
            .as_ref()
            .ok_or(PaymentProxyError::CallbackNotConfigured)?;

        sink.forward(&confirmation.to_registration_record())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    order_id = confirmation.order_id(),
                    "registration forwarding failed after verified payment"
                );
                PaymentProxyError::CallbackFailed
            })?;

        Ok(())
    }
}
