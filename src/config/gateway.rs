//! Payment gateway configuration

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Payment gateway configuration (Razorpay-style orders API).
///
/// Credentials are optional: without them the order-creation and
/// verification endpoints answer "payment not configured". When one half of
/// the credential pair is set without the other, validation fails.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Public key id, returned to the client so it can open the widget
    pub key_id: Option<String>,

    /// Secret key; signs orders and verifies payment signatures
    pub key_secret: Option<SecretString>,

    /// Base URL of the gateway REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Currency for created orders
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl GatewayConfig {
    /// Both credentials, when fully configured.
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match (self.key_id.as_deref(), self.key_secret.as_ref()) {
            (Some(id), Some(secret)) => Some((id, secret)),
            _ => None,
        }
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if Url::parse(&self.api_base_url).is_err() {
            return Err(ValidationError::InvalidGatewayBaseUrl);
        }
        if self.key_id.is_some() != self.key_secret.is_some() {
            return Err(ValidationError::IncompleteGatewayCredentials);
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            key_id: None,
            key_secret: None,
            api_base_url: default_api_base_url(),
            currency: default_currency(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_credentials_are_valid() {
        let config = GatewayConfig::default();
        assert!(config.credentials().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn half_configured_credentials_are_rejected() {
        let config = GatewayConfig {
            key_id: Some("rzp_test_abc".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn full_credentials_are_exposed_as_pair() {
        let config = GatewayConfig {
            key_id: Some("rzp_test_abc".to_string()),
            key_secret: Some(SecretString::new("secret".to_string())),
            ..Default::default()
        };
        let (id, _) = config.credentials().unwrap();
        assert_eq!(id, "rzp_test_abc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = GatewayConfig {
            api_base_url: "::".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
