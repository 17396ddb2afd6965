//! Ledger Service Port - wallet balance, transfer and history operations.
//!
//! The gateway never talks to a chain directly; adapters behind this port do.
//! Implementations exist for an in-memory wallet and a read-only Solana
//! JSON-RPC node.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Currency;
use crate::domain::ledger::{Balance, TransactionRecord, TransferReceipt, TransferRequest, WalletAddress};

/// Errors raised by a ledger adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Insufficient funds: requested {requested} {currency}, available {available}")]
    InsufficientFunds {
        requested: f64,
        available: f64,
        currency: Currency,
    },

    #[error("Currency not supported by this ledger: {0}")]
    UnsupportedCurrency(Currency),

    #[error("Operation not supported by this ledger: {0}")]
    Unsupported(String),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid ledger response: {0}")]
    InvalidResponse(String),
}

impl LedgerError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Returns true if retrying later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, LedgerError::Unavailable(_))
    }
}

/// Port for the wallet ledger.
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Current holdings of `currency`.
    async fn get_balance(&self, currency: Currency) -> Result<Balance, LedgerError>;

    /// Submits a transfer. Callers validate the request first.
    async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt, LedgerError>;

    /// A page of history, newest first.
    async fn list_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionRecord>, LedgerError>;

    /// The wallet this ledger operates on.
    fn wallet_address(&self) -> WalletAddress;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_service_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn LedgerService>();
    }

    #[test]
    fn insufficient_funds_message_names_amounts() {
        let err = LedgerError::InsufficientFunds {
            requested: 50.0,
            available: 42.5,
            currency: Currency::Sol,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 50 SOL, available 42.5"
        );
    }

    #[test]
    fn only_unavailable_is_transient() {
        assert!(LedgerError::unavailable("down").is_transient());
        assert!(!LedgerError::Unsupported("transfer".into()).is_transient());
    }
}
