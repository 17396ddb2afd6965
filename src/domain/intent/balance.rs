//! Balance query detector.

use serde_json::{json, Map};

use super::{Intent, IntentDetector, IntentResult, Utterance};
use crate::domain::foundation::Currency;
use crate::domain::tools::{ToolCallDraft, BALANCE_TOOL_ID};

pub const BALANCE_KEYWORDS: &[&str] = &["余额", "账户", "钱包", "balance", "account", "wallet"];

pub const BALANCE_CONFIDENCE: f64 = 0.9;

/// Detects "how much do I have" questions. Never gated.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceDetector;

impl IntentDetector for BalanceDetector {
    fn name(&self) -> &'static str {
        "balance"
    }

    fn detect(&self, utterance: &Utterance) -> Option<IntentResult> {
        if !utterance.mentions_any(BALANCE_KEYWORDS) {
            return None;
        }

        let currency = Currency::mentioned_in(utterance.lowercase());
        let mut args = Map::new();
        args.insert("currency".into(), json!(currency.as_str()));

        Some(IntentResult::with_tool_calls(
            Intent::QueryBalance,
            vec![ToolCallDraft::new(BALANCE_TOOL_ID, 0, args)],
            BALANCE_CONFIDENCE,
        ))
    }
}
