//! Shared error body and status mapping for HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body used by every module except the voice endpoints, which
/// always answer with an execution envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Status code for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidParameters | ErrorCode::UsernameTaken => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::ToolNotFound | ErrorCode::ContactNotFound | ErrorCode::UserNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::LedgerTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::UnsupportedTool | ErrorCode::ExecutionError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Converts a domain error into a JSON response.
///
/// Internal errors are logged and answered with a generic message.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = status_for(error.code);
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code, "{}", error.message);
        ErrorResponse::internal("An unexpected error occurred")
    } else {
        let body = ErrorResponse::new(error.code.as_str(), error.message);
        if error.details.is_empty() {
            body
        } else {
            body.with_details(serde_json::json!(error.details))
        }
    };
    body.into_response_with(status)
}
