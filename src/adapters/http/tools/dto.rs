//! Data transfer objects for tools HTTP endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::tools::ValidationResult;

/// Query parameters for listing tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListToolsQuery {
    /// Catalog category filter: `blockchain` or `utility`
    pub category: Option<String>,
}

/// Tool catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct ListToolsResponse {
    pub tools: Vec<Value>,
    pub total: usize,
}

/// Parameter schema of one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSchemaResponse {
    pub tool_id: String,
    pub parameters: Value,
}

/// Findings of a failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    pub missing_parameters: Vec<String>,
    pub type_errors: Vec<String>,
}

/// Outcome of `POST /:tool_id/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        if result.valid {
            Self {
                valid: true,
                message: Some("参数验证通过".to_string()),
                errors: None,
            }
        } else {
            Self {
                valid: false,
                message: None,
                errors: Some(ValidationErrors {
                    missing_parameters: result.missing,
                    type_errors: result.type_errors,
                }),
            }
        }
    }
}
