//! Partner registration callback configuration

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Partner callback configuration.
///
/// Verified payments are forwarded to this endpoint. URL and secret must be
/// configured together; without them the verify endpoint answers
/// "callback not configured".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackConfig {
    /// Partner callback endpoint URL
    pub url: Option<String>,

    /// Shared secret sent in the `X-Callback-Secret` header
    pub secret: Option<SecretString>,
}

impl CallbackConfig {
    /// URL and secret, when fully configured.
    pub fn endpoint(&self) -> Option<(&str, &SecretString)> {
        match (self.url.as_deref(), self.secret.as_ref()) {
            (Some(url), Some(secret)) => Some((url, secret)),
            _ => None,
        }
    }

    /// Validate callback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if Url::parse(url).is_err() {
                return Err(ValidationError::InvalidCallbackUrl);
            }
        }
        if self.url.is_some() != self.secret.is_some() {
            return Err(ValidationError::IncompleteCallbackConfig);
        }
        Ok(())
    }
}
