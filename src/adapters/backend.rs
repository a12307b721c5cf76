//! Continuum backend API client.
//!
//! Thin pass-through used by the subscription proxy: the caller's bearer
//! token is forwarded verbatim and upstream responses are returned as-is.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::ports::{BackendApi, BackendApiError, SubscriptionCheckoutRequest};

/// Timeout for backend calls.
const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`BackendApi`].
pub struct ContinuumBackend {
    base_url: String,
    http_client: reqwest::Client,
}

impl ContinuumBackend {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::builder()
                .timeout(BACKEND_TIMEOUT)
                .build()
                .expect("reqwest client construction cannot fail with static options"),
        }
    }

    /// Build from configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl BackendApi for ContinuumBackend {
    async fn create_checkout(
        &self,
        access_token: &str,
        request: &SubscriptionCheckoutRequest,
    ) -> Result<serde_json::Value, BackendApiError> {
        let url = format!("{}/subscription/checkout", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "backend checkout rejected");
            return Err(BackendApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BackendApiError::Network(format!("invalid checkout response: {e}")))
    }

    async fn export_usage(&self, access_token: &str, days: u32) -> Result<String, BackendApiError> {
        let url = format!("{}/subscription/usage/export?days={}", self.base_url, days);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| BackendApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "backend usage export rejected");
            return Err(BackendApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
