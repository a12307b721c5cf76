//! Payment proxy error taxonomy.
//!
//! Every failure surfaced by the order-creation and verification endpoints
//! maps onto one of these variants. Display strings are the short messages
//! returned to callers; operational detail (upstream status, response body)
//! is logged where the failure is observed, never echoed back.

use thiserror::Error;

/// Errors surfaced by the payment proxy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentProxyError {
    /// Request passed neither the trusted-origin nor the shared-secret check.
    #[error("Unauthorized")]
    Unauthorized,

    /// Gateway credentials are absent from configuration.
    #[error("Payment not configured")]
    NotConfigured,

    /// A required request field is missing or empty.
    #[error("Missing required fields")]
    MissingField {
        /// Which field failed validation; logged, not returned.
        field: &'static str,
    },

    /// Amount is not a positive finite number.
    #[error("Invalid amount")]
    InvalidAmount,

    /// Recomputed HMAC does not match the supplied signature.
    #[error("Invalid payment signature")]
    SignatureMismatch,

    /// The gateway rejected or failed the order-creation call.
    #[error("Failed to create order")]
    OrderCreationFailed,

    /// Partner callback URL/secret are absent from configuration.
    #[error("Callback not configured")]
    CallbackNotConfigured,

    /// The partner callback endpoint answered with a non-success status.
    #[error("Registration callback failed")]
    CallbackFailed,
}

impl PaymentProxyError {
    /// Shorthand for a missing-field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
