//! Partner registration callback forwarder.
//!
//! Performs the single POST of a verified registration to the partner's
//! callback endpoint, authenticated with the `X-Callback-Secret` header.
//! There is no retry here: the caller surfaces the failure and the client's
//! "try again" re-runs the whole verification flow.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::CallbackConfig;
use crate::domain::payment::RegistrationRecord;
use crate::ports::{CallbackError, RegistrationSink};

/// Header carrying the shared callback secret.
const CALLBACK_SECRET_HEADER: &str = "X-Callback-Secret";

/// Timeout for callback calls.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`RegistrationSink`].
pub struct CallbackForwarder {
    url: String,
    secret: SecretString,
    http_client: reqwest::Client,
}

impl CallbackForwarder {
    /// Create a forwarder for the given endpoint.
    pub fn new(url: impl Into<String>, secret: SecretString) -> Self {
        Self {
            url: url.into(),
            secret,
            http_client: reqwest::Client::builder()
                .timeout(CALLBACK_TIMEOUT)
                .build()
                .expect("reqwest client construction cannot fail with static options"),
        }
    }

    /// Build from configuration; `None` when URL or secret is absent.
    pub fn from_config(config: &CallbackConfig) -> Option<Self> {
        let (url, secret) = config.endpoint()?;
        Some(Self::new(url, secret.clone()))
    }
}

#[async_trait]
impl RegistrationSink for CallbackForwarder {
    async fn forward(&self, record: &RegistrationRecord) -> Result<(), CallbackError> {
        let response = self
            .http_client
            .post(&self.url)
            .header(CALLBACK_SECRET_HEADER, self.secret.expose_secret())
            .json(record)
            .send()
            .await
            .map_err(|e| CallbackError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(200).collect();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                order_id = %record.order_id,
                "partner callback failed"
            );
            return Err(CallbackError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
