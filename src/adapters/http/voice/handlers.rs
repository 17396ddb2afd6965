//! HTTP handlers for voice endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::voice::{execution_request, InterpretCommand, InterpretHandler};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::tools::{ToolError, ToolExecutionResult};
use crate::ports::ToolExecutor;

use super::dto::{ExecuteRequest, InterpretRequest, InterpretResponse};

/// Tool id reported when the request body could not be read.
const UNPARSED_TOOL_ID: &str = "unknown";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct VoiceHandlers {
    interpret_handler: Arc<InterpretHandler>,
    executor: Arc<dyn ToolExecutor>,
}

impl VoiceHandlers {
    pub fn new(interpret_handler: Arc<InterpretHandler>, executor: Arc<dyn ToolExecutor>) -> Self {
        Self {
            interpret_handler,
            executor,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /interpret - Classify an utterance and gate it
pub async fn interpret(
    State(handlers): State<VoiceHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<InterpretRequest>,
) -> Response {
    let result = handlers.interpret_handler.handle(InterpretCommand {
        query: req.query,
        session_id: req.session_id,
        principal: Some(user),
    });

    let response = InterpretResponse {
        result: result.intent,
        session_id: result.session_id,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /execute - Run a confirmed tool call
///
/// Always answers 200; the envelope's `success` flag carries the outcome,
/// including for bodies that do not parse.
pub async fn execute(
    State(handlers): State<VoiceHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(
                principal = %user.username,
                "Rejected execute body: {}",
                rejection.body_text()
            );
            let result = ToolExecutionResult::failure(
                UNPARSED_TOOL_ID,
                SessionId::generate(),
                ToolError::new(ErrorCode::InvalidParameters, "请求格式无效"),
            );
            return (StatusCode::OK, Json(result)).into_response();
        }
    };

    let request = execution_request(req.tool_id, req.parameters, req.session_id).with_principal(user);
    let result = handlers.executor.execute(request).await;
    (StatusCode::OK, Json(result)).into_response()
}
