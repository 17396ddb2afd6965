//! Ledger configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which ledger adapter backs the wallet
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LedgerBackend {
    /// In-memory demo wallet
    #[default]
    Mock,
    /// Read-only Solana JSON-RPC node
    Rpc,
}

/// Ledger configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub backend: LedgerBackend,

    /// JSON-RPC endpoint, required for the `rpc` backend
    pub rpc_url: Option<String>,

    /// Wallet the gateway operates on
    #[serde(default = "default_wallet_address")]
    pub wallet_address: String,

    /// Network name reported to clients
    #[serde(default = "default_network")]
    pub network: String,

    /// Bound on a single ledger call in milliseconds
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Inclusive upper bound on a single transfer
    #[serde(default = "default_max_transfer_amount")]
    pub max_transfer_amount: f64,

    /// SOL price used for `usd_value`
    #[serde(default = "default_sol_usd_price")]
    pub sol_usd_price: f64,
}

impl LedgerConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    /// Validate ledger configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == LedgerBackend::Rpc {
            let url = self
                .rpc_url
                .as_deref()
                .ok_or(ValidationError::MissingRequired("LEDGER__RPC_URL"))?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidRpcUrl);
            }
        }
        if self.wallet_address.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LEDGER__WALLET_ADDRESS"));
        }
        if self.call_timeout_ms == 0 || self.call_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidLedgerTimeout);
        }
        if !self.max_transfer_amount.is_finite() || self.max_transfer_amount <= 0.0 {
            return Err(ValidationError::InvalidMaxTransfer);
        }
        if !self.sol_usd_price.is_finite() || self.sol_usd_price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            backend: LedgerBackend::default(),
            rpc_url: None,
            wallet_address: default_wallet_address(),
            network: default_network(),
            call_timeout_ms: default_call_timeout_ms(),
            max_transfer_amount: default_max_transfer_amount(),
            sol_usd_price: default_sol_usd_price(),
        }
    }
}

fn default_wallet_address() -> String {
    "So11111111111111111111111111111111111111112".to_string()
}

fn default_network() -> String {
    "devnet".to_string()
}

fn default_call_timeout_ms() -> u64 {
    5000
}

fn default_max_transfer_amount() -> f64 {
    1000.0
}

fn default_sol_usd_price() -> f64 {
    20.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_config_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.backend, LedgerBackend::Mock);
        assert_eq!(config.network, "devnet");
        assert_eq!(config.call_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_transfer_amount, 1000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rpc_backend_requires_url() {
        let config = LedgerConfig {
            backend: LedgerBackend::Rpc,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("LEDGER__RPC_URL"))
        );

        let config = LedgerConfig {
            backend: LedgerBackend::Rpc,
            rpc_url: Some("ftp://node".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRpcUrl));

        let config = LedgerConfig {
            backend: LedgerBackend::Rpc,
            rpc_url: Some("https://api.devnet.solana.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_bounds() {
        let config = LedgerConfig {
            call_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLedgerTimeout));

        let config = LedgerConfig {
            max_transfer_amount: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxTransfer));

        let config = LedgerConfig {
            sol_usd_price: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPrice));
    }
}
