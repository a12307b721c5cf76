//! Payment intent: the validated input to order creation.

use chrono::Utc;

use super::errors::PaymentProxyError;

/// A validated request to collect payment for an event registration.
///
/// Built once from caller input, consumed once by order creation. The amount
/// is carried in decimal currency units and converted to integer minor units
/// exactly once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    amount: f64,
    event_id: String,
    event_name: String,
    payer_email: String,
    payer_user_id: String,
}

impl PaymentIntent {
    /// Validate and construct a payment intent.
    ///
    /// # Errors
    ///
    /// - `MissingField` if any identifier or the email is empty
    /// - `InvalidAmount` if the amount is not a positive finite number
    pub fn new(
        amount: f64,
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        payer_email: impl Into<String>,
        payer_user_id: impl Into<String>,
    ) -> Result<Self, PaymentProxyError> {
        let event_id = event_id.into();
        let event_name = event_name.into();
        let payer_email = payer_email.into();
        let payer_user_id = payer_user_id.into();

        if event_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("eventId"));
        }
        if event_name.trim().is_empty() {
            return Err(PaymentProxyError::missing("eventName"));
        }
        if payer_email.trim().is_empty() {
            return Err(PaymentProxyError::missing("email"));
        }
        if payer_user_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("userId"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentProxyError::InvalidAmount);
        }

        Ok(Self {
            amount,
            event_id,
            event_name,
            payer_email,
            payer_user_id,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Amount in the currency's smallest unit.
    pub fn amount_minor(&self) -> u64 {
        to_minor_units(self.amount)
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn payer_email(&self) -> &str {
        &self.payer_email
    }

    pub fn payer_user_id(&self) -> &str {
        &self.payer_user_id
    }

    /// Human-traceable receipt id for gateway-side reconciliation.
    ///
    /// Derived from the event id plus a base-36 timestamp suffix, so two
    /// orders for the same event stay distinguishable in gateway exports.
    pub fn receipt_id(&self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        format!("ev_{}_{}", self.event_id, base36(millis))
    }
}

/// Convert decimal currency units to integer minor units.
///
/// Rounds half away from zero; `499.99` becomes `49999`, `100.0` becomes
/// `10000`. Callers validate positivity before converting.
pub fn to_minor_units(amount: f64) -> u64 {
    (amount * 100.0).round() as u64
}

fn base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ASCII")
}
