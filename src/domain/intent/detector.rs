//! Detector chain that turns an utterance into an intent.
//!
//! Detectors are tried in a fixed priority order and the first one that
//! recognises the utterance wins. The order matters: transfer phrases are
//! checked before the balance keywords so that "transfer to Bob 5 from my wallet"
//! is not read as a balance query.

use tracing::debug;

use super::{BalanceDetector, HistoryDetector, IntentResult, TransferDetector};

/// A normalized utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    trimmed: String,
    lowercase: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().to_string();
        let lowercase = trimmed.to_lowercase();
        Self { trimmed, lowercase }
    }

    /// Text with surrounding whitespace removed, original casing kept.
    pub fn trimmed(&self) -> &str {
        &self.trimmed
    }

    /// Lowercased text for keyword matching.
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }

    /// Returns true if any keyword appears in the lowercased text.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lowercase.contains(k))
    }
}

/// One rule in the classifier chain.
///
/// Implementations must be pure: the same utterance always yields the same
/// answer.
pub trait IntentDetector: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns a result if this detector recognises the utterance.
    fn detect(&self, utterance: &Utterance) -> Option<IntentResult>;
}

/// Ordered chain of detectors with a greeting fallback.
pub struct IntentClassifier {
    detectors: Vec<Box<dyn IntentDetector>>,
}

impl IntentClassifier {
    /// Creates a classifier from an explicit chain.
    pub fn new(detectors: Vec<Box<dyn IntentDetector>>) -> Self {
        Self { detectors }
    }

    /// Transfer, then balance, then history.
    pub fn with_default_detectors() -> Self {
        Self::new(vec![
            Box::new(TransferDetector::new()),
            Box::new(BalanceDetector),
            Box::new(HistoryDetector),
        ])
    }

    /// Appends a detector at the lowest priority.
    pub fn with_detector(mut self, detector: Box<dyn IntentDetector>) -> Self {
        self.detectors.push(detector);
        self
    }

    /// Classifies an utterance.
    pub fn classify(&self, raw: &str) -> IntentResult {
        let utterance = Utterance::new(raw);

        for detector in &self.detectors {
            if let Some(result) = detector.detect(&utterance) {
                debug!(
                    detector = detector.name(),
                    intent = %result.intent,
                    confidence = result.confidence,
                    "Utterance classified"
                );
                return result;
            }
        }

        debug!("No detector matched, answering with greeting");
        IntentResult::fallback()
    }

    /// Detector names in priority order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::with_default_detectors()
    }
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("detectors", &self.detector_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::Intent;
    use crate::domain::tools::{ToolRegistry, BALANCE_TOOL_ID, HISTORY_TOOL_ID, TRANSFER_TOOL_ID};

    struct WeatherDetector;

    impl IntentDetector for WeatherDetector {
        fn name(&self) -> &'static str {
            "weather"
        }

        fn detect(&self, utterance: &Utterance) -> Option<IntentResult> {
            utterance
                .mentions_any(&["天气", "weather"])
                .then(|| IntentResult::direct_response("晴", 0.5))
        }
    }

    fn classifier() -> IntentClassifier {
        IntentClassifier::with_default_detectors()
    }

    #[test]
    fn utterance_trims_and_lowercases() {
        let u = Utterance::new("  Check My WALLET  ");
        assert_eq!(u.trimmed(), "Check My WALLET");
        assert_eq!(u.lowercase(), "check my wallet");
        assert!(u.mentions_any(&["wallet"]));
    }

    #[test]
    fn default_chain_order() {
        assert_eq!(classifier().detector_names(), vec!["transfer", "balance", "history"]);
    }

    #[test]
    fn transfer_wins_over_balance_keywords() {
        let result = classifier().classify("transfer to Bob 5 from my wallet balance");
        assert_eq!(result.intent, Intent::Transfer);
    }

    #[test]
    fn balance_query_does_not_require_confirmation() {
        let result = classifier().classify("查询我的余额");
        assert_eq!(result.intent, Intent::QueryBalance);
        assert!(!result.requires_confirmation);
        assert_eq!(result.tool_calls[0].tool_id(), BALANCE_TOOL_ID);
    }

    #[test]
    fn history_query_does_not_require_confirmation() {
        let result = classifier().classify("show my transaction history");
        assert_eq!(result.intent, Intent::QueryTransactions);
        assert!(!result.requires_confirmation);
        assert_eq!(result.tool_calls[0].tool_id(), HISTORY_TOOL_ID);
    }

    #[test]
    fn unknown_utterance_falls_back_to_greeting() {
        let result = classifier().classify("今天怎么样");
        assert_eq!(result.intent, Intent::DirectResponse);
        assert!(result.tool_calls.is_empty());
        assert!(!result.requires_confirmation);
        assert_eq!(result.confidence, 0.3);
    }

    #[test]
    fn empty_utterance_falls_back() {
        assert_eq!(classifier().classify("   ").intent, Intent::DirectResponse);
    }

    #[test]
    fn custom_detector_runs_after_builtins() {
        let classifier = classifier().with_detector(Box::new(WeatherDetector));
        assert_eq!(classifier.classify("北京天气").direct_message.as_deref(), Some("晴"));
        assert_eq!(classifier.classify("wallet weather").intent, Intent::QueryBalance);
    }

    #[test]
    fn classification_is_pure() {
        let classifier = classifier();
        for text in ["给小明 10", "余额", "transfer to alice 3 usdc", "hello"] {
            assert_eq!(classifier.classify(text), classifier.classify(text));
        }
    }

    #[test]
    fn every_emitted_tool_id_resolves_in_registry() {
        let registry = ToolRegistry::builtin(1000.0);
        let classifier = classifier();
        for text in ["给Bob 5", "wallet", "交易记录", "send 3 sol to carol"] {
            for call in classifier.classify(text).tool_calls {
                assert!(registry.has_tool(call.tool_id()), "dangling tool id {}", call.tool_id());
            }
        }
        assert!(registry.has_tool(TRANSFER_TOOL_ID));
    }
}
