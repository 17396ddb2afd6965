//! Data transfer objects for wallet endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query for `GET /balance`.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceQuery {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "SOL".to_string()
}

/// Query for `GET /transactions`. Bounds are checked by the history tool schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Body of `POST /transfer`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferBody {
    pub recipient: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub address: Value,
    pub balance: Value,
    pub currency: Value,
    pub usd_value: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionView {
    pub signature: Value,
    pub status: Value,
    pub amount: Value,
    pub currency: Value,
    pub recipient: Value,
    pub memo: Value,
    pub timestamp: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferResponse {
    pub success: bool,
    pub message: Value,
    pub transaction: TransactionView,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressResponse {
    pub address: String,
    pub network: String,
    pub user_id: u64,
}
