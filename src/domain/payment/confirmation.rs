//! Payment confirmation and the normalized registration record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::PaymentProxyError;

/// A completed payment as reported by the gateway's client widget.
///
/// Consumed exactly once by the verification forwarder; never persisted
/// locally. The signature field is the widget-supplied HMAC that
/// [`super::SignatureVerifier`] checks against the server-held secret.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    order_id: String,
    payment_id: String,
    signature: String,
    event_id: String,
    event_name: String,
    amount: f64,
    user_id: String,
    team: Option<Value>,
    team_name: Option<Value>,
    member_emails: Option<Value>,
    additional_info: Option<Value>,
}

impl PaymentConfirmation {
    /// Validate and construct a confirmation from its required fields.
    ///
    /// # Errors
    ///
    /// - `MissingField` if any identifier or the signature is empty
    /// - `InvalidAmount` if the amount is not finite
    pub fn new(
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        amount: f64,
        user_id: impl Into<String>,
    ) -> Result<Self, PaymentProxyError> {
        let order_id = order_id.into();
        let payment_id = payment_id.into();
        let signature = signature.into();
        let event_id = event_id.into();
        let event_name = event_name.into();
        let user_id = user_id.into();

        if order_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("orderId"));
        }
        if payment_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("paymentId"));
        }
        if signature.trim().is_empty() {
            return Err(PaymentProxyError::missing("signature"));
        }
        if event_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("eventId"));
        }
        if event_name.trim().is_empty() {
            return Err(PaymentProxyError::missing("eventName"));
        }
        if user_id.trim().is_empty() {
            return Err(PaymentProxyError::missing("userId"));
        }
        if !amount.is_finite() {
            return Err(PaymentProxyError::InvalidAmount);
        }

        Ok(Self {
            order_id,
            payment_id,
            signature,
            event_id,
            event_name,
            amount,
            user_id,
            team: None,
            team_name: None,
            member_emails: None,
            additional_info: None,
        })
    }

    pub fn with_team(mut self, team: Option<Value>) -> Self {
        self.team = team;
        self
    }

    pub fn with_team_name(mut self, team_name: Option<Value>) -> Self {
        self.team_name = team_name;
        self
    }

    pub fn with_member_emails(mut self, member_emails: Option<Value>) -> Self {
        self.member_emails = member_emails;
        self
    }

    pub fn with_additional_info(mut self, additional_info: Option<Value>) -> Self {
        self.additional_info = additional_info;
        self
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The normalized payload forwarded to the partner callback.
    ///
    /// Optional fields default to JSON `null` so the partner always receives
    /// the full shape.
    pub fn to_registration_record(&self) -> RegistrationRecord {
        RegistrationRecord {
            order_id: self.order_id.clone(),
            payment_id: self.payment_id.clone(),
            event_id: self.event_id.clone(),
            event_name: self.event_name.clone(),
            amount: self.amount,
            user_id: self.user_id.clone(),
            team: self.team.clone().unwrap_or(Value::Null),
            team_name: self.team_name.clone().unwrap_or(Value::Null),
            member_emails: self.member_emails.clone().unwrap_or(Value::Null),
            additional_info: self.additional_info.clone().unwrap_or(Value::Null),
        }
    }
}

/// Registration record forwarded to the partner callback service.
///
/// The order id doubles as the natural deduplication key on the partner
/// side; this service itself performs no retries and keeps no state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub order_id: String,
    pub payment_id: String,
    pub event_id: String,
    pub event_name: String,
    pub amount: f64,
    pub user_id: String,
    pub team: Value,
    pub team_name: Value,
    pub member_emails: Value,
    pub additional_info: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn confirmation() -> PaymentConfirmation {
        PaymentConfirmation::new(
            "order_1", "pay_1", "aa11", "E1", "Fest", 500.0, "U1",
        )
        .unwrap()
    }

    #[test]
    fn missing_order_id_is_rejected() {
        let err =
            PaymentConfirmation::new("", "pay_1", "aa11", "E1", "Fest", 500.0, "U1").unwrap_err();
        assert_eq!(err, PaymentProxyError::missing("orderId"));
    }

    #[test]
    fn missing_signature_is_rejected() {
        let err =
            PaymentConfirmation::new("order_1", "pay_1", " ", "E1", "Fest", 500.0, "U1")
                .unwrap_err();
        assert_eq!(err, PaymentProxyError::missing("signature"));
    }

    #[test]
    fn record_defaults_optionals_to_null() {
        let record = confirmation().to_registration_record();
        assert_eq!(record.team, Value::Null);
        assert_eq!(record.team_name, Value::Null);
        assert_eq!(record.member_emails, Value::Null);
        assert_eq!(record.additional_info, Value::Null);
    }

    #[test]
    fn record_serializes_camel_case_with_explicit_nulls() {
        let record = confirmation().to_registration_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["orderId"], "order_1");
        assert_eq!(json["paymentId"], "pay_1");
        assert_eq!(json["amount"], 500.0);
        assert!(json.as_object().unwrap().contains_key("teamName"));
        assert_eq!(json["teamName"], Value::Null);
    }

    #[test]
    fn record_carries_team_payload_through() {
        let team = json!({"name": "Rustaceans", "size": 3});
        let record = confirmation()
            .with_team(Some(team.clone()))
            .with_member_emails(Some(json!(["a@b.com", "c@d.com"])))
            .to_registration_record();
        assert_eq!(record.team, team);
        assert_eq!(record.member_emails, json!(["a@b.com", "c@d.com"]));
    }
}
