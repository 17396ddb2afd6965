//! Transaction history detector.

use serde_json::{json, Map};

use super::{Intent, IntentDetector, IntentResult, Utterance};
use crate::domain::tools::{ToolCallDraft, DEFAULT_HISTORY_LIMIT, HISTORY_TOOL_ID};

pub const HISTORY_KEYWORDS: &[&str] = &[
    "交易记录",
    "历史记录",
    "交易历史",
    "转账记录",
    "transaction",
    "history",
];

pub const HISTORY_CONFIDENCE: f64 = 0.9;

/// Detects requests for recent transactions, first page only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryDetector;

impl IntentDetector for HistoryDetector {
    fn name(&self) -> &'static str {
        "history"
    }

    fn detect(&self, utterance: &Utterance) -> Option<IntentResult> {
        if !utterance.mentions_any(HISTORY_KEYWORDS) {
            return None;
        }

        let mut args = Map::new();
        args.insert("limit".into(), json!(DEFAULT_HISTORY_LIMIT));
        args.insert("offset".into(), json!(0));

        Some(IntentResult::with_tool_calls(
            Intent::QueryTransactions,
            vec![ToolCallDraft::new(HISTORY_TOOL_ID, 0, args)],
            HISTORY_CONFIDENCE,
        ))
    }
}
