//! LedgerToolExecutor - runs confirmed tool calls against the wallet ledger.
//!
//! Every call goes through the same steps, whatever endpoint it came from:
//!
//! 1. Registry lookup (`TOOL_NOT_FOUND`)
//! 2. Parameter validation (`INVALID_PARAMETERS`)
//! 3. Schema defaults for absent optional parameters
//! 4. Ledger operation resolution (`UNSUPPORTED_TOOL`)
//! 5. Ledger dispatch under a timeout (`LEDGER_TIMEOUT`, `EXECUTION_ERROR`)
//!
//! Faults never escape as `Err` or as a panic; they come back inside the
//! result envelope.

use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use serde_json::{json, Map, Value};
use tokio::time::timeout;

use crate::domain::foundation::{Currency, ErrorCode, SessionId, Timestamp};
use crate::domain::ledger::TransferRequest;
use crate::domain::tools::{
    ParameterValidator, ToolError, ToolExecutionResult, ToolRegistry, BALANCE_TOOL_ID,
    DEFAULT_HISTORY_LIMIT, HISTORY_TOOL_ID, TRANSFER_TOOL_ID,
};
use crate::ports::{LedgerError, LedgerService, ToolExecutionRequest, ToolExecutor};

/// Default bound on a single ledger call.
pub const DEFAULT_LEDGER_TIMEOUT: Duration = Duration::from_secs(5);

/// A resolved ledger call with typed arguments.
#[derive(Debug, Clone, PartialEq)]
enum LedgerOperation {
    Transfer(TransferRequest),
    Balance(Currency),
    History { limit: usize, offset: usize },
}

/// Tool executor backed by a [`LedgerService`].
pub struct LedgerToolExecutor {
    registry: Arc<ToolRegistry>,
    ledger: Arc<dyn LedgerService>,
    validator: ParameterValidator,
    call_timeout: Duration,
}

impl LedgerToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>, ledger: Arc<dyn LedgerService>) -> Self {
        Self {
            registry,
            ledger,
            validator: ParameterValidator::new(),
            call_timeout: DEFAULT_LEDGER_TIMEOUT,
        }
    }

    /// Sets the bound on a single ledger call.
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    fn prepare(&self, request: &ToolExecutionRequest) -> Result<LedgerOperation, ToolError> {
        let tool = self.registry.get(&request.tool_id).map_err(|e| {
            ToolError::new(ErrorCode::ToolNotFound, e.to_string())
        })?;

        let validation = self.validator.validate(tool, &request.parameters);
        if !validation.valid {
            return Err(
                ToolError::new(ErrorCode::InvalidParameters, "参数验证失败").with_details(json!({
                    "missing": validation.missing,
                    "type_errors": validation.type_errors,
                })),
            );
        }

        let params = tool.parameters().apply_defaults(&request.parameters);
        resolve_operation(tool.id(), &params)
    }

    async fn dispatch(&self, operation: LedgerOperation) -> Result<Value, LedgerError> {
        match operation {
            LedgerOperation::Transfer(transfer) => {
                let receipt = self.ledger.transfer(transfer).await?;
                Ok(json!({
                    "transaction_hash": receipt.signature,
                    "status": receipt.status,
                    "recipient": receipt.recipient,
                    "amount": receipt.amount,
                    "currency": receipt.currency,
                    "memo": receipt.memo,
                    "timestamp": receipt.timestamp.to_rfc3339(),
                    "message": format!(
                        "成功向 {} 转账 {} {}",
                        receipt.recipient, receipt.amount, receipt.currency
                    ),
                }))
            }
            LedgerOperation::Balance(currency) => {
                let balance = self.ledger.get_balance(currency).await?;
                Ok(json!({
                    "address": balance.address,
                    "currency": balance.currency,
                    "balance": balance.amount,
                    "usd_value": balance.usd_value,
                    "timestamp": Timestamp::now().to_rfc3339(),
                    "message": format!("您的 {} 余额为 {}", balance.currency, balance.amount),
                }))
            }
            LedgerOperation::History { limit, offset } => {
                let transactions = self.ledger.list_transactions(limit, offset).await?;
                Ok(json!({
                    "total": transactions.len(),
                    "transactions": transactions,
                    "limit": limit,
                    "offset": offset,
                    "message": "获取交易记录成功",
                }))
            }
        }
    }

    async fn run(&self, operation: LedgerOperation) -> Result<Value, ToolError> {
        let call = AssertUnwindSafe(self.dispatch(operation)).catch_unwind();

        match timeout(self.call_timeout, call).await {
            Err(_) => Err(ToolError::new(
                ErrorCode::LedgerTimeout,
                format!("账本服务在 {} 毫秒内未响应", self.call_timeout.as_millis()),
            )),
            Ok(Err(_panic)) => Err(ToolError::new(ErrorCode::ExecutionError, "工具执行异常")),
            Ok(Ok(Err(ledger_error))) => Err(ToolError::new(
                ErrorCode::ExecutionError,
                ledger_error.to_string(),
            )),
            Ok(Ok(Ok(data))) => Ok(data),
        }
    }
}

#[async_trait]
impl ToolExecutor for LedgerToolExecutor {
    async fn execute(&self, request: ToolExecutionRequest) -> ToolExecutionResult {
        let principal = request
            .principal
            .as_ref()
            .map(|p| p.username.clone())
            .unwrap_or_else(|| "anonymous".to_string());

        let outcome = match self.prepare(&request) {
            Ok(operation) => self.run(operation).await,
            Err(error) => Err(error),
        };

        let ToolExecutionRequest {
            tool_id,
            session_id,
            ..
        } = request;

        match outcome {
            Ok(data) => {
                tracing::info!(
                    tool_id = %tool_id,
                    session_id = %session_id,
                    principal = %principal,
                    "Tool executed"
                );
                ToolExecutionResult::success(tool_id, session_id, data)
            }
            Err(error) => {
                tracing::warn!(
                    tool_id = %tool_id,
                    session_id = %session_id,
                    principal = %principal,
                    code = %error.code,
                    "Tool execution failed: {}",
                    error.message
                );
                ToolExecutionResult::failure(tool_id, session_id, error)
            }
        }
    }
}

impl std::fmt::Debug for LedgerToolExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerToolExecutor")
            .field("tools", &self.registry.len())
            .field("call_timeout", &self.call_timeout)
            .finish_non_exhaustive()
    }
}

/// Maps a validated, defaulted parameter set onto a ledger call.
fn resolve_operation(
    tool_id: &str,
    params: &Map<String, Value>,
) -> Result<LedgerOperation, ToolError> {
    match tool_id {
        TRANSFER_TOOL_ID => {
            let recipient = params
                .get("recipient")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let amount = params
                .get("amount")
                .and_then(Value::as_f64)
                .unwrap_or_default();
            Ok(LedgerOperation::Transfer(TransferRequest {
                recipient,
                amount,
                currency: currency_param(params)?,
                memo: params.get("memo").and_then(Value::as_str).map(str::to_string),
            }))
        }
        BALANCE_TOOL_ID => Ok(LedgerOperation::Balance(currency_param(params)?)),
        HISTORY_TOOL_ID => Ok(LedgerOperation::History {
            limit: count_param(params, "limit", DEFAULT_HISTORY_LIMIT as usize),
            offset: count_param(params, "offset", 0),
        }),
        other => Err(ToolError::new(
            ErrorCode::UnsupportedTool,
            format!("工具 {} 暂不支持执行", other),
        )),
    }
}

fn currency_param(params: &Map<String, Value>) -> Result<Currency, ToolError> {
    match params.get("currency").and_then(Value::as_str) {
        None => Ok(Currency::default()),
        Some(raw) => Currency::from_str(raw)
            .map_err(|e| ToolError::new(ErrorCode::InvalidParameters, e.to_string())),
    }
}

fn count_param(params: &Map<String, Value>, name: &str, fallback: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(fallback)
}

/// Convenience for callers that only have a raw session id.
pub fn execution_request(
    tool_id: impl Into<String>,
    parameters: Map<String, Value>,
    session_id: Option<String>,
) -> ToolExecutionRequest {
    ToolExecutionRequest::new(tool_id, parameters, SessionId::or_generate(session_id))
}
