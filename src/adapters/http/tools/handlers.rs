//! HTTP handlers for tools endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::tools::{ParameterValidator, ToolCategory, ToolDescriptor, ToolRegistry};

use super::dto::{ListToolsQuery, ListToolsResponse, ToolSchemaResponse, ValidateResponse};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsHandlers {
    registry: Arc<ToolRegistry>,
    validator: ParameterValidator,
}

impl ToolsHandlers {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            validator: ParameterValidator::new(),
        }
    }

    fn lookup(&self, tool_id: &str) -> Result<&ToolDescriptor, Response> {
        self.registry.get(tool_id).map_err(|_| {
            ErrorResponse::not_found("Tool", tool_id).into_response_with(StatusCode::NOT_FOUND)
        })
    }
}

/// List tools, optionally by category.
///
/// GET /tools?category=blockchain
pub async fn list_tools(
    State(handlers): State<ToolsHandlers>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<ListToolsQuery>,
) -> Response {
    let category = match query.category.as_deref().filter(|c| !c.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<ToolCategory>() {
            Ok(category) => Some(category),
            Err(message) => {
                return ErrorResponse::bad_request(message).into_response_with(StatusCode::BAD_REQUEST)
            }
        },
    };

    let tools: Vec<Value> = handlers
        .registry
        .list(category)
        .into_iter()
        .map(ToolDescriptor::to_json)
        .collect();

    Json(ListToolsResponse {
        total: tools.len(),
        tools,
    })
    .into_response()
}

/// GET /tools/:tool_id
pub async fn get_tool(
    State(handlers): State<ToolsHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(tool_id): Path<String>,
) -> Response {
    match handlers.lookup(&tool_id) {
        Ok(tool) => Json(tool.to_json()).into_response(),
        Err(response) => response,
    }
}

/// GET /tools/:tool_id/schema
pub async fn get_tool_schema(
    State(handlers): State<ToolsHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(tool_id): Path<String>,
) -> Response {
    match handlers.lookup(&tool_id) {
        Ok(tool) => Json(ToolSchemaResponse {
            tool_id: tool.id().to_string(),
            parameters: tool.parameters().to_json_schema(),
        })
        .into_response(),
        Err(response) => response,
    }
}

/// Check a parameter set without executing anything.
///
/// POST /tools/:tool_id/validate
pub async fn validate_parameters(
    State(handlers): State<ToolsHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(tool_id): Path<String>,
    Json(parameters): Json<Map<String, Value>>,
) -> Response {
    match handlers.lookup(&tool_id) {
        Ok(tool) => {
            let result = handlers.validator.validate(tool, &parameters);
            Json(ValidateResponse::from(result)).into_response()
        }
        Err(response) => response,
    }
}
