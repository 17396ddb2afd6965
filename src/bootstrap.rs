//! Composition root - wires configuration, adapters and handlers into a router.
//!
//! `main` calls [`build_app`]; integration tests call [`build_app_with_ledger`]
//! to swap in a slow or failing ledger.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::adapters::auth::{HmacPasswordHasher, JwtTokenService};
use crate::adapters::http::{
    api_router, with_middleware, ApiHandlers, AuthHandlers, AuthState, ToolsHandlers,
    UserHandlers, VoiceHandlers, WalletHandlers,
};
use crate::adapters::ledger::{MockLedgerService, SolanaRpcLedger};
use crate::adapters::memory::{
    InMemoryContactRepository, InMemorySettingsRepository, InMemoryUserRepository,
};
use crate::application::handlers::auth::{LoginHandler, RefreshTokenHandler, RegisterHandler};
use crate::application::handlers::voice::{InterpretHandler, LedgerToolExecutor};
use crate::config::{AppConfig, ConfigError, LedgerBackend, LedgerConfig, ValidationError};
use crate::domain::foundation::AuthError;
use crate::domain::intent::{ConfirmationGate, IntentClassifier};
use crate::domain::ledger::WalletAddress;
use crate::domain::tools::ToolRegistry;
use crate::ports::{LedgerError, LedgerService, ToolExecutor};

/// Errors that stop the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Ledger setup failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Demo user seeding failed: {0}")]
    Seed(#[from] AuthError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the ledger adapter selected by configuration.
pub fn build_ledger(config: &LedgerConfig) -> Result<Arc<dyn LedgerService>, StartupError> {
    let ledger: Arc<dyn LedgerService> = match config.backend {
        LedgerBackend::Mock => Arc::new(
            MockLedgerService::new()
                .with_address(config.wallet_address.clone())
                .with_network(config.network.clone())
                .with_sol_usd_price(config.sol_usd_price),
        ),
        LedgerBackend::Rpc => {
            let rpc_url = config
                .rpc_url
                .clone()
                .ok_or(ValidationError::MissingRequired("LEDGER__RPC_URL"))?;
            Arc::new(SolanaRpcLedger::new(
                rpc_url,
                WalletAddress {
                    address: config.wallet_address.clone(),
                    network: config.network.clone(),
                },
                config.sol_usd_price,
                config.call_timeout(),
            )?)
        }
    };
    Ok(ledger)
}

/// Builds the full application from validated configuration.
pub fn build_app(config: &AppConfig) -> Result<Router, StartupError> {
    let ledger = build_ledger(&config.ledger)?;
    build_app_with_ledger(config, ledger)
}

/// Builds the full application around a given ledger.
pub fn build_app_with_ledger(
    config: &AppConfig,
    ledger: Arc<dyn LedgerService>,
) -> Result<Router, StartupError> {
    // Identity
    let hasher = Arc::new(HmacPasswordHasher::new(config.auth.password_pepper()));
    let tokens = Arc::new(JwtTokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_issuer.clone(),
        config.auth.access_token_ttl(),
    ));
    let validator: AuthState = tokens.clone();

    // Storage
    let users = Arc::new(if config.auth.seed_demo_users {
        InMemoryUserRepository::with_demo_users(hasher.as_ref())?
    } else {
        InMemoryUserRepository::new()
    });
    let contacts = Arc::new(InMemoryContactRepository::new());
    let settings = Arc::new(InMemorySettingsRepository::new());

    // Voice pipeline
    let registry = Arc::new(ToolRegistry::builtin(config.ledger.max_transfer_amount));
    let classifier = Arc::new(IntentClassifier::with_default_detectors());
    let gate = Arc::new(ConfirmationGate::new(registry.clone()));
    let executor: Arc<dyn ToolExecutor> = Arc::new(
        LedgerToolExecutor::new(registry.clone(), ledger.clone())
            .with_call_timeout(config.ledger.call_timeout()),
    );

    tracing::info!(
        tools = registry.len(),
        detectors = ?classifier.detector_names(),
        backend = ?config.ledger.backend,
        "Voice pipeline ready"
    );

    let handlers = ApiHandlers {
        auth: AuthHandlers::new(
            Arc::new(LoginHandler::new(users.clone(), hasher.clone(), tokens.clone())),
            Arc::new(RefreshTokenHandler::new(users.clone(), tokens)),
            Arc::new(RegisterHandler::new(users.clone(), hasher)),
        ),
        voice: VoiceHandlers::new(
            Arc::new(InterpretHandler::new(classifier, gate)),
            executor.clone(),
        ),
        tools: ToolsHandlers::new(registry),
        wallet: WalletHandlers::new(executor, ledger),
        user: UserHandlers::new(users, contacts, settings),
    };

    let router = api_router(&config.server.api_prefix(), handlers, validator);
    Ok(with_middleware(router, &config.server))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = SecretString::new("bootstrap-test-secret".into());
        config
    }

    #[test]
    fn mock_backend_uses_configured_wallet() {
        let mut config = config();
        config.ledger.wallet_address = "DemoWallet1111".into();
        config.ledger.network = "testnet".into();

        let ledger = build_ledger(&config.ledger).unwrap();
        let address = ledger.wallet_address();
        assert_eq!(address.address, "DemoWallet1111");
        assert_eq!(address.network, "testnet");
    }

    #[test]
    fn rpc_backend_requires_url() {
        let mut config = config();
        config.ledger.backend = LedgerBackend::Rpc;
        config.ledger.rpc_url = None;

        assert!(matches!(
            build_ledger(&config.ledger),
            Err(StartupError::Invalid(ValidationError::MissingRequired(_)))
        ));
    }

    #[test]
    fn app_builds_from_defaults() {
        assert!(build_app(&config()).is_ok());
    }
}
