//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (HS256 JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    #[serde(default = "empty_secret")]
    pub jwt_secret: SecretString,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_minutes: u64,

    /// Server-side pepper for password digests; falls back to the JWT secret
    pub password_pepper: Option<SecretString>,

    /// Seed the demo accounts at startup
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl AuthConfig {
    /// Get access token lifetime as Duration
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_minutes * 60)
    }

    /// Pepper used by the password hasher
    pub fn password_pepper(&self) -> SecretString {
        self.password_pepper
            .clone()
            .unwrap_or_else(|| self.jwt_secret.clone())
    }

    /// Validate authentication configuration
    ///
    /// The secret is always required. In production it must also be long
    /// enough for HS256.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret_len = self.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_ISSUER"));
        }
        if self.access_token_ttl_minutes == 0 || self.access_token_ttl_minutes > 1440 {
            return Err(ValidationError::InvalidTokenTtl);
        }

        if *environment == Environment::Production && secret_len < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: empty_secret(),
            jwt_issuer: default_issuer(),
            access_token_ttl_minutes: default_access_token_ttl(),
            password_pepper: None,
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_issuer() -> String {
    "voice-wallet".to_string()
}

fn default_access_token_ttl() -> u64 {
    30
}

fn default_seed_demo_users() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl_minutes, 30);
        assert_eq!(config.jwt_issuer, "voice-wallet");
        assert!(config.seed_demo_users);
    }

    #[test]
    fn test_access_token_ttl_duration() {
        let config = AuthConfig {
            access_token_ttl_minutes: 60,
            ..with_secret("secret")
        };
        assert_eq!(config.access_token_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_validation_production_requires_long_secret() {
        let config = with_secret("short-dev-secret");
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(32))
        );

        let config = with_secret("0123456789abcdef0123456789abcdef");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_token_ttl_bounds() {
        let config = AuthConfig {
            access_token_ttl_minutes: 0,
            ..with_secret("secret")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenTtl)
        );
    }

    #[test]
    fn test_pepper_falls_back_to_secret() {
        let config = with_secret("jwt");
        assert_eq!(config.password_pepper().expose_secret(), "jwt");

        let config = AuthConfig {
            password_pepper: Some(SecretString::new("pepper".to_string())),
            ..with_secret("jwt")
        };
        assert_eq!(config.password_pepper().expose_secret(), "pepper");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", with_secret("super-secret-value"));
        assert!(!debug.contains("super-secret-value"));
    }
}
