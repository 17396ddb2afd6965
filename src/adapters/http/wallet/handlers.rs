//! HTTP handlers for wallet endpoints.
//!
//! Balance, transfer and history go through the tool executor, so they get
//! the same validation, timeout and fault handling as voice-initiated calls.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::voice::execution_request;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::tools::{ToolExecutionResult, BALANCE_TOOL_ID, HISTORY_TOOL_ID, TRANSFER_TOOL_ID};
use crate::ports::{LedgerService, ToolExecutor};

use super::dto::{
    AddressResponse, BalanceQuery, BalanceResponse, TransactionView, TransactionsQuery,
    TransferBody, TransferResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WalletHandlers {
    executor: Arc<dyn ToolExecutor>,
    ledger: Arc<dyn LedgerService>,
}

impl WalletHandlers {
    pub fn new(executor: Arc<dyn ToolExecutor>, ledger: Arc<dyn LedgerService>) -> Self {
        Self { executor, ledger }
    }

    async fn run(
        &self,
        tool_id: &str,
        parameters: Map<String, Value>,
        user: AuthenticatedUser,
    ) -> Result<Value, Response> {
        let request = execution_request(tool_id, parameters, None).with_principal(user);
        let result = self.executor.execute(request).await;
        match result.data() {
            Some(data) if result.is_success() => Ok(data.clone()),
            _ => Err(failure_response(&result)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /blockchain/balance?currency=SOL
pub async fn get_balance(
    State(handlers): State<WalletHandlers>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<BalanceQuery>,
) -> Response {
    let mut params = Map::new();
    params.insert("currency".into(), json!(query.currency.to_uppercase()));

    match handlers.run(BALANCE_TOOL_ID, params, user).await {
        Ok(data) => Json(BalanceResponse {
            address: data["address"].clone(),
            balance: data["balance"].clone(),
            currency: data["currency"].clone(),
            usd_value: data["usd_value"].clone(),
        })
        .into_response(),
        Err(response) => response,
    }
}

/// POST /blockchain/transfer
pub async fn transfer(
    State(handlers): State<WalletHandlers>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<TransferBody>,
) -> Response {
    let mut params = Map::new();
    params.insert("recipient".into(), json!(body.recipient));
    params.insert("amount".into(), json!(body.amount));
    params.insert("currency".into(), json!(body.currency));
    if let Some(memo) = body.memo {
        params.insert("memo".into(), json!(memo));
    }

    match handlers.run(TRANSFER_TOOL_ID, params, user).await {
        Ok(data) => Json(TransferResponse {
            success: true,
            message: data["message"].clone(),
            transaction: TransactionView {
                signature: data["transaction_hash"].clone(),
                status: data["status"].clone(),
                amount: data["amount"].clone(),
                currency: data["currency"].clone(),
                recipient: data["recipient"].clone(),
                memo: data["memo"].clone(),
                timestamp: data["timestamp"].clone(),
            },
        })
        .into_response(),
        Err(response) => response,
    }
}

/// GET /blockchain/transactions?limit=10&offset=0
pub async fn list_transactions(
    State(handlers): State<WalletHandlers>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<TransactionsQuery>,
) -> Response {
    let mut params = Map::new();
    if let Some(limit) = query.limit {
        params.insert("limit".into(), json!(limit));
    }
    if let Some(offset) = query.offset {
        params.insert("offset".into(), json!(offset));
    }

    match handlers.run(HISTORY_TOOL_ID, params, user).await {
        Ok(mut data) => Json(data["transactions"].take()).into_response(),
        Err(response) => response,
    }
}

/// GET /blockchain/address
pub async fn get_address(
    State(handlers): State<WalletHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let wallet = handlers.ledger.wallet_address();
    Json(AddressResponse {
        address: wallet.address,
        network: wallet.network,
        user_id: user.id.value(),
    })
    .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn failure_response(result: &ToolExecutionResult) -> Response {
    let Some(error) = result.error() else {
        return ErrorResponse::internal("Tool returned no data")
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
    };

    let status = match error.code.as_str() {
        "INVALID_PARAMETERS" => StatusCode::BAD_REQUEST,
        "TOOL_NOT_FOUND" => StatusCode::NOT_FOUND,
        "LEDGER_TIMEOUT" => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut body = ErrorResponse::new(error.code.clone(), error.message.clone());
    if let Some(details) = &error.details {
        body = body.with_details(details.clone());
    }
    body.into_response_with(status)
}
