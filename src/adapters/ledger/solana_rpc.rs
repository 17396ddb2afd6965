//! Solana JSON-RPC ledger - read-only access to a real wallet.
//!
//! Balances come from `getBalance` and history from
//! `getSignaturesForAddress`. The adapter never signs anything, so transfers
//! are rejected as unsupported. Only SOL is readable; SPL token balances
//! (USDC) need token-account lookups this adapter does not do.
//!
//! # Configuration
//!
//! ```ignore
//! let ledger = SolanaRpcLedger::new(
//!     "https://api.devnet.solana.com",
//!     WalletAddress { address: "So111...".into(), network: "devnet".into() },
//!     20.5,
//!     Duration::from_secs(5),
//! )?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::foundation::{Currency, Timestamp};
use crate::domain::ledger::{
    Balance, TransactionRecord, TransactionStatus, TransferReceipt, TransferRequest, WalletAddress,
};
use crate::ports::{LedgerError, LedgerService};

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Read-only ledger backed by a Solana RPC node.
pub struct SolanaRpcLedger {
    client: Client,
    rpc_url: String,
    address: WalletAddress,
    sol_usd_price: f64,
}

impl SolanaRpcLedger {
    pub fn new(
        rpc_url: impl Into<String>,
        address: WalletAddress,
        sol_usd_price: f64,
        timeout: Duration,
    ) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LedgerError::unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
            address,
            sol_usd_price,
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, LedgerError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LedgerError::unavailable(format!("{} timed out", method))
                } else if e.is_connect() {
                    LedgerError::unavailable(format!("Connection failed: {}", e))
                } else {
                    LedgerError::unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::unavailable(format!(
                "RPC status {}: {}",
                status, body
            )));
        }

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| LedgerError::InvalidResponse(e.to_string()))?;

        match (body.result, body.error) {
            (_, Some(err)) => Err(LedgerError::InvalidResponse(format!(
                "{} failed ({}): {}",
                method, err.code, err.message
            ))),
            (Some(result), None) => Ok(result),
            (None, None) => Err(LedgerError::InvalidResponse(format!(
                "{} returned no result",
                method
            ))),
        }
    }
}

#[async_trait]
impl LedgerService for SolanaRpcLedger {
    async fn get_balance(&self, currency: Currency) -> Result<Balance, LedgerError> {
        if currency != Currency::Sol {
            return Err(LedgerError::UnsupportedCurrency(currency));
        }

        let result: BalanceResult = self
            .call("getBalance", json!([self.address.address]))
            .await?;
        let amount = lamports_to_sol(result.value);

        Ok(Balance {
            address: self.address.address.clone(),
            currency,
            amount,
            usd_value: amount * self.sol_usd_price,
        })
    }

    async fn transfer(&self, _request: TransferRequest) -> Result<TransferReceipt, LedgerError> {
        tracing::warn!("Transfer requested against read-only RPC ledger");
        Err(LedgerError::Unsupported(
            "transfers are not available on the RPC ledger".to_string(),
        ))
    }

    async fn list_transactions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let fetch = offset.saturating_add(limit);
        if fetch == 0 {
            return Ok(Vec::new());
        }

        let signatures: Vec<SignatureInfo> = self
            .call(
                "getSignaturesForAddress",
                json!([self.address.address, { "limit": fetch }]),
            )
            .await?;

        Ok(signatures
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|info| info.into_record(&self.address.address))
            .collect())
    }

    fn wallet_address(&self) -> WalletAddress {
        self.address.clone()
    }
}

impl std::fmt::Debug for SolanaRpcLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaRpcLedger")
            .field("rpc_url", &self.rpc_url)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureInfo {
    signature: String,
    err: Option<Value>,
    block_time: Option<i64>,
    confirmation_status: Option<String>,
}

impl SignatureInfo {
    /// Signature listings carry no amounts; the record only locates the
    /// transaction and reports its settlement state.
    fn into_record(self, wallet: &str) -> TransactionRecord {
        let status = if self.err.is_some() {
            TransactionStatus::Failed
        } else {
            match self.confirmation_status.as_deref() {
                Some("confirmed") | Some("finalized") => TransactionStatus::Confirmed,
                _ => TransactionStatus::Pending,
            }
        };

        TransactionRecord {
            signature: self.signature,
            status,
            amount: 0.0,
            currency: Currency::Sol,
            recipient: wallet.to_string(),
            timestamp: self
                .block_time
                .and_then(Timestamp::from_unix_secs)
                .unwrap_or_else(Timestamp::now),
        }
    }
}
