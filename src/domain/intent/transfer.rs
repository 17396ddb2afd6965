//! Transfer detector.
//!
//! Recognises "send AMOUNT to RECIPIENT" phrasings in Chinese and English.
//! Every variant is tried in order; a variant whose amount does not parse as a
//! finite number is skipped rather than ending the search.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use super::{Intent, IntentDetector, IntentResult, Utterance};
use crate::domain::foundation::Currency;
use crate::domain::tools::{ToolCallDraft, TRANSFER_TOOL_ID};

/// Confidence assigned to a recognised transfer.
pub const TRANSFER_CONFIDENCE: f64 = 0.95;

const RECIPIENT: &str = r"[a-zA-Z0-9\x{4e00}-\x{9fa5}]";
const AMOUNT: &str = r"[0-9]+(?:\.[0-9]+)?";
const CN_VERB: &str = r"(?:转账|发送|转给|发给|给)";
const EN_VERB: &str = r"\b(?:transfer|send|pay|give)\b";

/// Captures that name the speaker rather than a payee ("give me 5").
const SELF_REFERENCES: &[&str] = &["me", "us", "myself", "我自己", "我们"];

/// Phrase variants with named `recipient` and `amount` groups, in match order.
static TRANSFER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 向小明转账10
        format!(r"(?i)向\s*(?P<recipient>{RECIPIENT}{{2,20}})\s*转账\s*(?P<amount>{AMOUNT})"),
        // transfer to bob 10
        format!(r"(?i){EN_VERB}\s+(?:to\s+)?(?P<recipient>{RECIPIENT}{{2,20}})\s+(?P<amount>{AMOUNT})"),
        // send 10 sol to bob
        format!(
            r"(?i){EN_VERB}\s+(?P<amount>{AMOUNT})\s*(?:sol|usdc)?\s+to\s+(?P<recipient>{RECIPIENT}{{2,20}})"
        ),
        // 给小明 10
        format!(r"(?i){CN_VERB}\s*(?:给\s*)?(?P<recipient>{RECIPIENT}{{2,20}})\s+(?P<amount>{AMOUNT})"),
        // 给小明10个sol
        format!(
            r"(?i){CN_VERB}\s*(?:给\s*)?(?P<recipient>{RECIPIENT}{{2,20}}?)(?P<amount>{AMOUNT})(?:个|sol|usdc|\s|$)"
        ),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("transfer pattern is valid"))
    .collect()
});

/// A recognised transfer request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPhrase {
    pub recipient: String,
    /// Amount text exactly as spoken.
    pub amount_text: String,
    pub amount: f64,
    pub currency: Currency,
}

impl TransferPhrase {
    /// Finds the first variant that yields a recipient and a finite amount.
    pub fn parse(utterance: &Utterance) -> Option<Self> {
        let text = utterance.trimmed();
        TRANSFER_PATTERNS.iter().find_map(|pattern| {
            let caps = pattern.captures(text)?;
            let recipient = caps.name("recipient")?.as_str();
            if is_self_reference(recipient) {
                return None;
            }
            let amount_text = caps.name("amount")?.as_str();
            let amount: f64 = amount_text.parse().ok().filter(|a: &f64| a.is_finite())?;
            Some(Self {
                recipient: recipient.to_string(),
                amount_text: amount_text.to_string(),
                amount,
                currency: Currency::mentioned_in(utterance.lowercase()),
            })
        })
    }

    /// Prompt that echoes the parsed request back to the user.
    pub fn confirmation_message(&self) -> String {
        transfer_confirmation_message(&self.recipient, &self.amount_text, self.currency.as_str())
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("recipient".into(), json!(self.recipient));
        args.insert("amount".into(), json!(self.amount));
        args.insert("currency".into(), json!(self.currency.as_str()));
        args
    }
}

fn is_self_reference(recipient: &str) -> bool {
    SELF_REFERENCES
        .iter()
        .any(|word| recipient.eq_ignore_ascii_case(word))
}

/// Builds the transfer confirmation prompt.
pub fn transfer_confirmation_message(recipient: &str, amount: &str, currency: &str) -> String {
    format!("您要向 {recipient} 转账 {amount} {currency}，是否确认？")
}

/// Detects transfer requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferDetector;

impl TransferDetector {
    pub fn new() -> Self {
        Self
    }
}

impl IntentDetector for TransferDetector {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn detect(&self, utterance: &Utterance) -> Option<IntentResult> {
        let phrase = TransferPhrase::parse(utterance)?;
        let draft = ToolCallDraft::new(TRANSFER_TOOL_ID, 0, phrase.arguments());
        Some(
            IntentResult::with_tool_calls(Intent::Transfer, vec![draft], TRANSFER_CONFIDENCE)
                .requiring_confirmation(phrase.confirmation_message()),
        )
    }
}
