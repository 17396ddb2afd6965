//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VOICE_WALLET` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use voice_wallet::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod error;
mod ledger;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use error::{ConfigError, ValidationError};
pub use ledger::{LedgerBackend, LedgerConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, API version)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration (JWT signing, demo users)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Ledger configuration (backend, limits, prices)
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VOICE_WALLET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VOICE_WALLET__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VOICE_WALLET__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    /// - `VOICE_WALLET__LEDGER__BACKEND=rpc` -> `ledger.backend = rpc`
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
                    .prefix("VOICE_WALLET")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ledger.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "VOICE_WALLET__AUTH__JWT_SECRET",
        "VOICE_WALLET__SERVER__PORT",
        "VOICE_WALLET__SERVER__ENVIRONMENT",
        "VOICE_WALLET__LEDGER__BACKEND",
        "VOICE_WALLET__LEDGER__RPC_URL",
        "VOICE_WALLET__LEDGER__MAX_TRANSFER_AMOUNT",
    ];

    fn set_minimal_env() {
        env::set_var("VOICE_WALLET__AUTH__JWT_SECRET", "dev-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.auth.jwt_secret.expose_secret(), "dev-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.api_version, "v1");
        assert_eq!(config.ledger.backend, LedgerBackend::Mock);
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOICE_WALLET__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort(32))
        );
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOICE_WALLET__SERVER__PORT", "3000");
        env::set_var("VOICE_WALLET__LEDGER__BACKEND", "rpc");
        env::set_var("VOICE_WALLET__LEDGER__RPC_URL", "https://api.devnet.solana.com");
        env::set_var("VOICE_WALLET__LEDGER__MAX_TRANSFER_AMOUNT", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ledger.backend, LedgerBackend::Rpc);
        assert_eq!(config.ledger.max_transfer_amount, 250.0);
        assert!(config.validate().is_ok());
    }
}
