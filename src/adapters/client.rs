//! HTTP client for the proxy's own payment endpoints.
//!
//! Used by cross-service callers (and the checkout orchestrator) to drive
//! `/ev/create-order` and `/ev/verify`. Carries the shared proxy secret in
//! the `X-Ev-Secret` header when configured, since such calls have no
//! browser origin to be trusted by.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;

use crate::adapters::http::payments::dto::{
    CreateOrderBody, CreateOrderResponse, ErrorBody, VerifyBody,
};
use crate::domain::payment::{PaymentConfirmation, PaymentIntent};
use crate::ports::{CheckoutOrder, ProxyApi, ProxyApiError};

/// Timeout for proxy calls.
const PROXY_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`ProxyApi`].
pub struct ProxyClient {
    base_url: String,
    shared_secret: Option<SecretString>,
    http_client: reqwest::Client,
}

impl ProxyClient {
    /// Create a client for the proxy at `base_url`.
    pub fn new(base_url: impl Into<String>, shared_secret: Option<SecretString>) -> Self {
        Self {
            base_url: base_url.into(),
            shared_secret,
            http_client: reqwest::Client::builder()
                .timeout(PROXY_TIMEOUT)
                .build()
                .expect("reqwest client construction cannot fail with static options"),
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http_client.post(format!("{}{}", self.base_url, path));
        if let Some(secret) = &self.shared_secret {
            request = request.header("X-Ev-Secret", secret.expose_secret());
        }
        request
    }
}

/// Turn a non-success response into the proxy's error message.
async fn rejection(response: reqwest::Response, fallback: &str) -> ProxyApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| fallback.to_string());
    ProxyApiError::Rejected { status, message }
}

fn optional(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}

#[async_trait]
impl ProxyApi for ProxyClient {
    async fn create_order(&self, intent: &PaymentIntent) -> Result<CheckoutOrder, ProxyApiError> {
        let body = CreateOrderBody {
            amount: Some(intent.amount()),
            event_id: Some(intent.event_id().to_string()),
            event_name: Some(intent.event_name().to_string()),
            email: Some(intent.payer_email().to_string()),
            user_id: Some(intent.payer_user_id().to_string()),
        };

        let response = self
            .post("/ev/create-order")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProxyApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response, "Failed to create order").await);
        }

        let order: CreateOrderResponse = response
            .json()
            .await
            .map_err(|e| ProxyApiError::InvalidResponse(e.to_string()))?;

        Ok(CheckoutOrder {
            order_id: order.id,
            amount_minor: order.amount,
            currency: order.currency,
            key_id: order.key_id,
        })
    }

    async fn verify(&self, confirmation: &PaymentConfirmation) -> Result<(), ProxyApiError> {
        let record = confirmation.to_registration_record();
        let body = VerifyBody {
            order_id: Some(record.order_id),
            payment_id: Some(record.payment_id),
            signature: Some(confirmation.signature().to_string()),
            event_id: Some(record.event_id),
            event_name: Some(record.event_name),
            amount: Some(record.amount),
            user_id: Some(record.user_id),
            team: optional(record.team),
            team_name: optional(record.team_name),
            member_emails: optional(record.member_emails),
            additional_info: optional(record.additional_info),
        };

        let response = self
            .post("/ev/verify")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProxyApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response, "Payment verification failed").await);
        }

        Ok(())
    }
}
