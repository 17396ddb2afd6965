//! Tools - catalog, schemas and execution envelopes.
//!
//! ## Key Types
//!
//! - [`ToolDescriptor`] - Metadata and parameter schema for a tool
//! - [`ToolRegistry`] - Immutable catalog with exact-id lookup
//! - [`ParameterValidator`] - Checks arguments against a schema
//! - [`ToolCallDraft`] - Proposed invocation emitted by the classifier
//! - [`ToolExecutionResult`] - Success/failure envelope returned by execution

mod schema;
mod tool_call;
mod tool_definition;
mod tool_registry;
mod tool_result;
mod validator;

pub use schema::{ParamType, ParameterSchema, ParameterSpec};
pub use tool_call::ToolCallDraft;
pub use tool_definition::{ToolCategory, ToolDescriptor, ToolEffect};
pub use tool_registry::{
    ToolNotFound, ToolRegistry, BALANCE_TOOL_ID, DEFAULT_HISTORY_LIMIT, HISTORY_TOOL_ID,
    MAX_HISTORY_LIMIT, TRANSFER_TOOL_ID, WEATHER_TOOL_ID,
};
pub use tool_result::{ToolError, ToolExecutionResult};
pub use validator::{ParameterValidator, ValidationResult};
