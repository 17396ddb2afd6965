//! Mock Ledger Service for development and testing.
//!
//! Holds a single demo wallet in memory. Transfers debit the balance and are
//! prepended to the history, so a balance query after a transfer reflects it.
//!
//! # Features
//!
//! - Seeded balances and three historical transactions
//! - Simulated latency for timeout testing
//! - Error and panic injection for executor resilience tests
//!
//! # Example
//!
//! ```ignore
//! let ledger = MockLedgerService::new()
//!     .with_delay(Duration::from_millis(100));
//!
//! let balance = ledger.get_balance(Currency::Sol).await?;
//! assert_eq!(balance.amount, 42.5);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;
use tokio::time::sleep;
use uuid::Uuid;

use crate::domain::foundation::{Currency, Timestamp};
use crate::domain::ledger::{
    Balance, TransactionRecord, TransactionStatus, TransferReceipt, TransferRequest, WalletAddress,
};
use crate::ports::{LedgerError, LedgerService};

/// Address of the demo wallet.
pub const MOCK_WALLET_ADDRESS: &str = "So11111111111111111111111111111111111111112";

/// Starting SOL holdings.
pub const MOCK_SOL_BALANCE: f64 = 42.5;

/// Starting USDC holdings.
pub const MOCK_USDC_BALANCE: f64 = 150.0;

/// Default SOL price in USD.
pub const DEFAULT_SOL_USD_PRICE: f64 = 20.5;

/// How an injected fault behaves.
#[derive(Debug, Clone)]
enum Fault {
    Error(LedgerError),
    Panic,
}

#[derive(Debug)]
struct WalletState {
    balances: HashMap<Currency, f64>,
    history: Vec<TransactionRecord>,
}

/// In-memory wallet.
#[derive(Debug)]
pub struct MockLedgerService {
    address: WalletAddress,
    sol_usd_price: f64,
    delay: Duration,
    fault: Option<Fault>,
    state: RwLock<WalletState>,
}

impl MockLedgerService {
    /// Creates the demo wallet with seeded balances and history.
    pub fn new() -> Self {
        let balances = HashMap::from([
            (Currency::Sol, MOCK_SOL_BALANCE),
            (Currency::Usdc, MOCK_USDC_BALANCE),
        ]);

        Self {
            address: WalletAddress {
                address: MOCK_WALLET_ADDRESS.to_string(),
                network: "devnet".to_string(),
            },
            sol_usd_price: DEFAULT_SOL_USD_PRICE,
            delay: Duration::ZERO,
            fault: None,
            state: RwLock::new(WalletState {
                balances,
                history: seed_history(),
            }),
        }
    }

    /// Sets the SOL price used for `usd_value`.
    pub fn with_sol_usd_price(mut self, price: f64) -> Self {
        self.sol_usd_price = price;
        self
    }

    /// Sets the network name reported by `wallet_address`.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.address.network = network.into();
        self
    }

    /// Sets the wallet address reported by balances and `wallet_address`.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address.address = address.into();
        self
    }

    /// Delays every call by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fails every call with `error`.
    pub fn with_error(mut self, error: LedgerError) -> Self {
        self.fault = Some(Fault::Error(error));
        self
    }

    /// Panics inside every call.
    pub fn with_panic(mut self) -> Self {
        self.fault = Some(Fault::Panic);
        self
    }

    fn usd_price(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Sol => self.sol_usd_price,
            Currency::Usdc => 1.0,
        }
    }

    async fn simulate(&self) -> Result<(), LedgerError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        match &self.fault {
            None => Ok(()),
            Some(Fault::Error(e)) => Err(e.clone()),
            Some(Fault::Panic) => panic!("mock ledger fault injected"),
        }
    }
}

impl Default for MockLedgerService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerService for MockLedgerService {
    async fn get_balance(&self, currency: Currency) -> Result<Balance, LedgerError> {
        self.simulate().await?;

        let state = self.state.read().await;
        let amount = state.balances.get(&currency).copied().unwrap_or(0.0);

        Ok(Balance {
            address: self.address.address.clone(),
            currency,
            amount,
            usd_value: amount * self.usd_price(currency),
        })
    }

    async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt, LedgerError> {
        self.simulate().await?;

        let mut state = self.state.write().await;
        let available = state.balances.get(&request.currency).copied().unwrap_or(0.0);
        if request.amount > available {
            return Err(LedgerError::InsufficientFunds {
                requested: request.amount,
                available,
                currency: request.currency,
            });
        }
        state
            .balances
            .insert(request.currency, available - request.amount);

        let receipt = TransferReceipt {
            signature: mock_signature(),
            status: TransactionStatus::Confirmed,
            recipient: request.recipient,
            amount: request.amount,
            currency: request.currency,
            memo: request.memo,
            timestamp: Timestamp::now(),
        };
        state.history.insert(0, TransactionRecord::from(&receipt));

        tracing::debug!(
            signature = %receipt.signature,
            amount = receipt.amount,
            currency = %receipt.currency,
            "Mock transfer settled"
        );

        Ok(receipt)
    }

    async fn list_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        self.simulate().await?;

        let state = self.state.read().await;
        Ok(state
            .history
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn wallet_address(&self) -> WalletAddress {
        self.address.clone()
    }
}

fn mock_signature() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("mock_tx_{}", &hex[..16])
}

fn seed_history() -> Vec<TransactionRecord> {
    let seeded = [
        ("mock_tx_001", 10.0, "Alice", (2025, 6, 15, 10, 30)),
        ("mock_tx_002", 25.0, "Bob", (2025, 6, 14, 15, 45)),
        ("mock_tx_003", 5.5, "Charlie", (2025, 6, 13, 9, 15)),
    ];

    seeded
        .into_iter()
        .map(|(signature, amount, recipient, (y, mo, d, h, mi))| TransactionRecord {
            signature: signature.to_string(),
            status: TransactionStatus::Confirmed,
            amount,
            currency: Currency::Sol,
            recipient: recipient.to_string(),
            timestamp: Utc
                .with_ymd_and_hms(y, mo, d, h, mi, 0)
                .single()
                .map(Timestamp::from_datetime)
                .unwrap_or_else(Timestamp::now),
        })
        .collect()
}
