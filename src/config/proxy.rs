//! Proxy authorization configuration

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Configuration for the payment proxy authorization gate.
///
/// Requests are trusted when they originate from the configured site (or
/// localhost during development), or when they carry the shared secret in
/// the `X-Ev-Secret` header or as a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Public site URL used for the trusted-origin check
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Shared secret for cross-service callers without a browser origin
    pub shared_secret: Option<SecretString>,
}

impl ProxyConfig {
    /// Hostname of the configured site URL.
    pub fn site_host(&self) -> Option<String> {
        Url::parse(&self.site_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    /// Validate proxy configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.site_host().is_none() {
            return Err(ValidationError::InvalidSiteUrl);
        }
        Ok(())
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            shared_secret: None,
        }
    }
}

fn default_site_url() -> String {
    "https://continuumworks.app".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_host() {
        let config = ProxyConfig::default();
        assert_eq!(config.site_host().as_deref(), Some("continuumworks.app"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_site_url_is_rejected() {
        let config = ProxyConfig {
            site_url: "not a url".to_string(),
            shared_secret: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn custom_site_host_is_extracted() {
        let config = ProxyConfig {
            site_url: "https://staging.continuumworks.app:8443/base".to_string(),
            shared_secret: None,
        };
        assert_eq!(
            config.site_host().as_deref(),
            Some("staging.continuumworks.app")
        );
    }
}
