//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid site URL")]
    InvalidSiteUrl,

    #[error("Invalid gateway API base URL")]
    InvalidGatewayBaseUrl,

    #[error("Gateway key id and key secret must be configured together")]
    IncompleteGatewayCredentials,

    #[error("Invalid partner callback URL")]
    InvalidCallbackUrl,

    #[error("Callback URL and callback secret must be configured together")]
    IncompleteCallbackConfig,

    #[error("Invalid backend API base URL")]
    InvalidApiBaseUrl,
}
