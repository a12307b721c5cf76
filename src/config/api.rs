//! Continuum backend API configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Backend API configuration for the subscription proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Continuum backend REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    /// Validate backend API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if Url::parse(&self.base_url).is_err() {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_valid() {
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "nope".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
