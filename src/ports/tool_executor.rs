//! Tool Executor Port - Interface for running a confirmed tool call.
//!
//! The executor is the only place where a tool call reaches the ledger. It is
//! infallible at the type level: lookup failures, validation failures, ledger
//! errors, timeouts and panics all come back as a failed
//! [`ToolExecutionResult`] rather than an `Err`.
//!
//! # Example
//!
//! ```ignore
//! use voice_wallet::ports::{ToolExecutionRequest, ToolExecutor};
//!
//! let result = executor
//!     .execute(ToolExecutionRequest::new("query_balance", params, session_id))
//!     .await;
//! if !result.is_success() {
//!     tracing::warn!(code = ?result.error_code(), "tool failed");
//! }
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::foundation::{AuthenticatedUser, SessionId};
use crate::domain::tools::ToolExecutionResult;

/// A request to run one tool.
#[derive(Debug, Clone)]
pub struct ToolExecutionRequest {
    pub tool_id: String,
    pub parameters: Map<String, Value>,
    pub session_id: SessionId,
    /// Caller identity, used for logging and correlation only.
    pub principal: Option<AuthenticatedUser>,
}

impl ToolExecutionRequest {
    pub fn new(
        tool_id: impl Into<String>,
        parameters: Map<String, Value>,
        session_id: SessionId,
    ) -> Self {
        Self {
            tool_id: tool_id.into(),
            parameters,
            session_id,
            principal: None,
        }
    }

    pub fn with_principal(mut self, principal: AuthenticatedUser) -> Self {
        self.principal = Some(principal);
        self
    }
}

/// Port for executing tool calls.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Executes a tool and reports the outcome.
    ///
    /// Never fails; every fault is normalized into the returned envelope.
    /// The request's `session_id` is echoed back unchanged.
    async fn execute(&self, request: ToolExecutionRequest) -> ToolExecutionResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};
    use serde_json::json;

    struct EchoExecutor;

    #[async_trait]
    impl ToolExecutor for EchoExecutor {
        async fn execute(&self, request: ToolExecutionRequest) -> ToolExecutionResult {
            ToolExecutionResult::success(
                request.tool_id,
                request.session_id,
                Value::Object(request.parameters),
            )
        }
    }

    #[test]
    fn tool_executor_is_object_safe() {
        fn _accepts_dyn(_executor: &dyn ToolExecutor) {}
    }

    #[test]
    fn tool_executor_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ToolExecutor>();
    }

    #[test]
    fn request_builder_attaches_principal() {
        let request = ToolExecutionRequest::new("query_balance", Map::new(), SessionId::generate())
            .with_principal(AuthenticatedUser::new(UserId::new(1), "testuser", Role::User));
        assert_eq!(request.principal.unwrap().username, "testuser");
    }

    #[tokio::test]
    async fn executor_echoes_session_id() {
        let mut params = Map::new();
        params.insert("currency".into(), json!("SOL"));
        let session = SessionId::new("s1").unwrap();

        let result = EchoExecutor
            .execute(ToolExecutionRequest::new("query_balance", params, session.clone()))
            .await;

        assert_eq!(result.session_id(), &session);
        assert_eq!(result.data().unwrap()["currency"], "SOL");
    }
}
