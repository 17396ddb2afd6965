//! Tool call draft produced by intent classification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A proposed tool invocation awaiting user confirmation and execution.
///
/// `call_id` is derived from the tool id and the draft's position in the
/// result, so classifying the same utterance twice yields identical drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallDraft {
    call_id: String,
    tool_id: String,
    arguments: Map<String, Value>,
}

impl ToolCallDraft {
    /// Creates a draft at `position` within its intent result.
    pub fn new(tool_id: impl Into<String>, position: usize, arguments: Map<String, Value>) -> Self {
        let tool_id = tool_id.into();
        Self {
            call_id: format!("{tool_id}_{position}"),
            tool_id,
            arguments,
        }
    }

    pub fn call_id(&self) -> &str {
        &self.call_id
    }

    pub fn tool_id(&self) -> &str {
        &self.tool_id
    }

    pub fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }

    /// Returns a single argument.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}
