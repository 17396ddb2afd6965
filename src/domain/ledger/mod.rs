//! Ledger - wallet value objects exchanged with the ledger service.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::foundation::{Currency, Timestamp};

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Confirmed => "confirmed",
            TransactionStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// The wallet this gateway operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletAddress {
    pub address: String,
    pub network: String,
}

/// Holdings of one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub address: String,
    pub currency: Currency,
    pub amount: f64,
    pub usd_value: f64,
}

/// A validated request to move funds.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: f64,
    pub currency: Currency,
    pub memo: Option<String>,
}

/// Result of a submitted transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReceipt {
    pub signature: String,
    pub status: TransactionStatus,
    pub recipient: String,
    pub amount: f64,
    pub currency: Currency,
    pub memo: Option<String>,
    pub timestamp: Timestamp,
}

/// One entry in the wallet's history, newest first when listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub signature: String,
    pub status: TransactionStatus,
    pub amount: f64,
    pub currency: Currency,
    pub recipient: String,
    pub timestamp: Timestamp,
}

impl From<&TransferReceipt> for TransactionRecord {
    fn from(receipt: &TransferReceipt) -> Self {
        Self {
            signature: receipt.signature.clone(),
            status: receipt.status,
            amount: receipt.amount,
            currency: receipt.currency,
            recipient: receipt.recipient.clone(),
            timestamp: receipt.timestamp,
        }
    }
}
