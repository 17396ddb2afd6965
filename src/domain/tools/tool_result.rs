//! Tool execution result envelope.
//!
//! Every execution, successful or not, answers with this envelope. The
//! constructors are the only way to build one, so `data` and `error` are never
//! both present and a failed result always carries an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ErrorCode, SessionId};

/// Structured failure carried in a result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Outcome of a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolExecutionResult {
    success: bool,
    tool_id: String,
    session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ToolError>,
}

impl ToolExecutionResult {
    /// Creates a successful result.
    pub fn success(tool_id: impl Into<String>, session_id: SessionId, data: Value) -> Self {
        Self {
            success: true,
            tool_id: tool_id.into(),
            session_id,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed result.
    pub fn failure(tool_id: impl Into<String>, session_id: SessionId, error: ToolError) -> Self {
        Self {
            success: false,
            tool_id: tool_id.into(),
            session_id,
            data: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Returns the error code, if this is a failure.
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}
