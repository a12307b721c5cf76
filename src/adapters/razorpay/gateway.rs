//! Razorpay orders API client.
//!
//! Authenticates with HTTP basic auth (key id / key secret) and creates
//! orders in minor units. Calls carry an explicit timeout so a stalled
//! gateway cannot hang a request indefinitely.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::ports::{CreateOrderRequest, GatewayError, GatewayOrder, PaymentGateway};

use super::types::{RazorpayOrderRequest, RazorpayOrderResponse};

/// Timeout for gateway calls.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Razorpay implementation of [`PaymentGateway`].
pub struct RazorpayGateway {
    key_id: String,
    key_secret: SecretString,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a gateway client with explicit credentials.
    pub fn new(
        key_id: impl Into<String>,
        key_secret: SecretString,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret,
            api_base_url: api_base_url.into(),
            http_client: reqwest::Client::builder()
                .timeout(GATEWAY_TIMEOUT)
                .build()
                .expect("reqwest client construction cannot fail with static options"),
        }
    }

    /// Build from configuration; `None` when credentials are absent.
    pub fn from_config(config: &GatewayConfig) -> Option<Self> {
        let (key_id, key_secret) = config.credentials()?;
        Some(Self::new(
            key_id,
            key_secret.clone(),
            config.api_base_url.clone(),
        ))
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.api_base_url);
        let body = RazorpayOrderRequest::from(request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(200).collect();
            tracing::error!(status = status.as_u16(), body = %body, "Razorpay order creation failed");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let order: RazorpayOrderResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(GatewayOrder {
            id: order.id,
            amount_minor: order.amount,
            currency: order.currency,
        })
    }
}
