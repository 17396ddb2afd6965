//! Confirmation Gate.
//!
//! Any result that proposes a state-changing tool call must ask the user first.
//! The gate enforces that after classification, whatever detector produced the
//! result. Read-only results pass through untouched.
//!
//! Confirmation evidence is structural: the client only issues the separate
//! execute request after the user accepts the prompt. The execution path does
//! not re-run the gate.

use std::sync::Arc;

use serde_json::Value;

use super::{transfer_confirmation_message, Intent, IntentResult};
use crate::domain::tools::{ToolCallDraft, ToolRegistry};

/// Decides whether a classified result needs user confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmationGate {
    registry: Arc<ToolRegistry>,
}

impl ConfirmationGate {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Forces confirmation for mutating calls and fills in a prompt when absent.
    pub fn annotate(&self, mut result: IntentResult) -> IntentResult {
        let mutating_call = result.tool_calls.iter().find(|call| self.is_mutating(call));

        if result.intent != Intent::Transfer && mutating_call.is_none() {
            return result;
        }

        if result.confirmation_message.is_none() {
            let message = match mutating_call.or_else(|| result.tool_calls.first()) {
                Some(call) => synthesize_message(call),
                None => "该操作需要您的确认，是否继续？".to_string(),
            };
            result.confirmation_message = Some(message);
        }
        result.requires_confirmation = true;
        result
    }

    fn is_mutating(&self, call: &ToolCallDraft) -> bool {
        self.registry
            .get(call.tool_id())
            .map(|tool| tool.effect().is_mutating())
            .unwrap_or(false)
    }
}

fn synthesize_message(call: &ToolCallDraft) -> String {
    match (call.argument("recipient"), call.argument("amount")) {
        (Some(recipient), Some(amount)) => {
            let currency = call
                .argument("currency")
                .and_then(Value::as_str)
                .unwrap_or("SOL");
            transfer_confirmation_message(&plain(recipient), &plain(amount), currency)
        }
        _ => format!("您即将执行 {}，是否确认？", call.tool_id()),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
