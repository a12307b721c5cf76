//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTINUUM_` prefix and nested values use double underscores as
//! separators.
//!
//! Every section has defaults: the service boots with no credentials
//! configured and answers the affected endpoints with "not configured"
//! errors at request time instead of failing startup.
//!
//! # Example
//!
//! ```no_run
//! use continuum_payments::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {}", config.server.socket_addr());
//! ```

mod api;
mod beta;
mod callback;
mod error;
mod gateway;
mod proxy;
mod server;

pub use api::ApiConfig;
pub use beta::BetaConfig;
pub use callback::CallbackConfig;
pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;
pub use proxy::ProxyConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the payments proxy.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Proxy authorization configuration (site URL, shared secret)
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Payment gateway configuration (key id/secret, orders API)
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Partner registration callback configuration
    #[serde(default)]
    pub callback: CallbackConfig,

    /// Continuum backend API configuration (subscription proxy)
    #[serde(default)]
    pub api: ApiConfig,

    /// Beta access gate configuration
    #[serde(default)]
    pub beta: BetaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CONTINUUM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTINUUM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTINUUM__GATEWAY__KEY_ID=rzp_test_x` -> `gateway.key_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTINUUM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation: URL formats, port/timeout ranges, and
    /// credentials that must be configured in pairs. Absent credentials are
    /// valid — the affected endpoints report "not configured" per request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configured value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.proxy.validate()?;
        self.gateway.validate()?;
        self.callback.validate()?;
        self.api.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
