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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid API version segment: {0}")]
    InvalidApiVersion(String),

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("Access token lifetime must be between 1 and 1440 minutes")]
    InvalidTokenTtl,

    #[error("Invalid RPC URL format")]
    InvalidRpcUrl,

    #[error("Ledger call timeout must be between 1 and 60000 ms")]
    InvalidLedgerTimeout,

    #[error("Maximum transfer amount must be a positive number")]
    InvalidMaxTransfer,

    #[error("SOL price must be a non-negative number")]
    InvalidPrice,
}
