//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max} characters, got {actual}")]
    LengthOutOfRange {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a length out of range validation error.
    pub fn length_out_of_range(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::LengthOutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
///
/// The `Display` form is the wire code carried in tool execution envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidParameters,

    // Not found errors
    ToolNotFound,
    ContactNotFound,
    UserNotFound,

    // Conflict errors
    UsernameTaken,

    // Execution errors
    UnsupportedTool,
    ExecutionError,
    LedgerTimeout,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            ErrorCode::ToolNotFound => "TOOL_NOT_FOUND",
            ErrorCode::ContactNotFound => "CONTACT_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::UnsupportedTool => "UNSUPPORTED_TOOL",
            ErrorCode::ExecutionError => "EXECUTION_ERROR",
            ErrorCode::LedgerTimeout => "LEDGER_TIMEOUT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DomainError::validation(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("username");
        assert_eq!(format!("{}", err), "Field 'username' cannot be empty");
    }

    #[test]
    fn validation_error_length_displays_bounds() {
        let err = ValidationError::length_out_of_range("password", 6, 50, 3);
        assert_eq!(
            format!("{}", err),
            "Field 'password' must be between 6 and 50 characters, got 3"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ToolNotFound, "Tool not found");
        assert_eq!(format!("{}", err), "[TOOL_NOT_FOUND] Tool not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "recipient")
            .with_detail("reason", "missing");

        assert_eq!(err.details.get("field"), Some(&"recipient".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"missing".to_string()));
    }

    #[test]
    fn validation_error_converts_into_domain_error_with_field() {
        let err: DomainError = ValidationError::invalid_format("username", "bad chars").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"username".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ToolNotFound), "TOOL_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InvalidParameters), "INVALID_PARAMETERS");
        assert_eq!(format!("{}", ErrorCode::LedgerTimeout), "LEDGER_TIMEOUT");
        assert_eq!(format!("{}", ErrorCode::UnsupportedTool), "UNSUPPORTED_TOOL");
        assert_eq!(format!("{}", ErrorCode::ExecutionError), "EXECUTION_ERROR");
    }
}
