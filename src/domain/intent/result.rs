//! Intent result value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::tools::ToolCallDraft;

/// Greeting returned when no detector recognises the utterance.
pub const FALLBACK_GREETING: &str = "您好！我是您的语音助手，有什么可以帮助您的吗？";

/// Confidence assigned to the fallback result.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Transfer,
    QueryBalance,
    QueryTransactions,
    DirectResponse,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Transfer => "transfer",
            Intent::QueryBalance => "query_balance",
            Intent::QueryTransactions => "query_transactions",
            Intent::DirectResponse => "direct_response",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one utterance.
///
/// Produced fresh per request and never persisted. It carries everything the
/// client needs to replay the execution request later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentResult {
    pub intent: Intent,
    pub requires_confirmation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_message: Option<String>,
    pub confidence: f64,
}

impl IntentResult {
    /// A result that proposes tool calls.
    pub fn with_tool_calls(intent: Intent, tool_calls: Vec<ToolCallDraft>, confidence: f64) -> Self {
        Self {
            intent,
            requires_confirmation: false,
            confirmation_message: None,
            tool_calls,
            direct_message: None,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// A result that answers directly without tools.
    pub fn direct_response(message: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: Intent::DirectResponse,
            requires_confirmation: false,
            confirmation_message: None,
            tool_calls: Vec::new(),
            direct_message: Some(message.into()),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// The greeting returned when nothing matched.
    pub fn fallback() -> Self {
        Self::direct_response(FALLBACK_GREETING, FALLBACK_CONFIDENCE)
    }

    /// Marks the result as needing confirmation with the given prompt.
    pub fn requiring_confirmation(mut self, message: impl Into<String>) -> Self {
        self.requires_confirmation = true;
        self.confirmation_message = Some(message.into());
        self
    }
}
