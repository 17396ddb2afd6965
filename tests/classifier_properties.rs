//! Property tests for intent classification and the confirmation gate.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use voice_wallet::domain::intent::{ConfirmationGate, Intent, IntentClassifier, IntentResult};
use voice_wallet::domain::tools::{ParameterValidator, ToolRegistry};

fn registry() -> Arc<ToolRegistry> {
    Arc::new(ToolRegistry::builtin(1000.0))
}

fn interpret(text: &str) -> IntentResult {
    let gate = ConfirmationGate::new(registry());
    gate.annotate(IntentClassifier::with_default_detectors().classify(text))
}

/// Names made of letters, digits and a few common given-name characters.
fn recipient() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9小明王李张华]{2,20}".prop_filter("words naming the speaker are not payees", |r| {
        !["me", "us", "myself"].contains(&r.to_ascii_lowercase().as_str())
    })
}

/// Integer or decimal amounts as spoken.
fn amount_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1_000_000).prop_map(|n| n.to_string()),
        (0u32..10_000, "[0-9]{1,4}").prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ]
}

/// Filler words that never form an amount.
fn filler() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

fn assert_transfer(result: &IntentResult, recipient: &str, amount: &str) {
    assert_eq!(result.intent, Intent::Transfer);
    assert!(result.requires_confirmation);

    let message = result.confirmation_message.as_deref().unwrap();
    assert!(message.contains(recipient), "{message} lacks {recipient}");
    assert!(message.contains(amount), "{message} lacks {amount}");

    let call = &result.tool_calls[0];
    assert_eq!(call.tool_id(), "transfer_sol");
    assert_eq!(call.call_id(), "transfer_sol_0");
    assert_eq!(call.argument("recipient"), Some(&json!(recipient)));
    let expected: f64 = amount.parse().unwrap();
    assert_eq!(call.argument("amount").and_then(Value::as_f64), Some(expected));
}

proptest! {
    #[test]
    fn english_transfer_is_parsed_and_gated(r in recipient(), a in amount_text()) {
        let result = interpret(&format!("transfer {r} {a}"));
        assert_transfer(&result, &r, &a);
    }

    #[test]
    fn chinese_transfer_is_parsed_and_gated(r in recipient(), a in amount_text()) {
        let result = interpret(&format!("向 {r} 转账 {a}"));
        assert_transfer(&result, &r, &a);
    }

    #[test]
    fn classification_is_deterministic(text in "\\PC{0,40}") {
        let classifier = IntentClassifier::with_default_detectors();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }

    #[test]
    fn confidence_stays_in_unit_interval(text in "\\PC{0,40}") {
        let result = interpret(&text);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn balance_queries_are_never_gated(
        before in filler(),
        keyword in prop::sample::select(vec!["余额", "账户", "钱包", "balance", "wallet"]),
        after in filler(),
    ) {
        let result = interpret(&format!("{before}{keyword}{after}"));
        prop_assert_ne!(result.intent, Intent::Transfer);
        prop_assert!(!result.requires_confirmation);
        prop_assert!(result.confirmation_message.is_none());
    }

    #[test]
    fn history_queries_are_never_gated(
        before in filler(),
        keyword in prop::sample::select(vec!["交易记录", "历史记录", "history", "transaction"]),
        after in filler(),
    ) {
        let result = interpret(&format!("{before}{keyword}{after}"));
        prop_assert_ne!(result.intent, Intent::Transfer);
        prop_assert!(!result.requires_confirmation);
    }

    #[test]
    fn every_proposed_tool_is_registered(text in "\\PC{0,40}") {
        let registry = registry();
        let result = interpret(&text);
        for call in &result.tool_calls {
            prop_assert!(registry.has_tool(call.tool_id()), "unknown tool {}", call.tool_id());
        }
    }

    #[test]
    fn proposed_arguments_validate(r in recipient(), a in 1u32..1000) {
        let registry = registry();
        let result = interpret(&format!("send {a} sol to {r}"));
        let call = &result.tool_calls[0];
        let tool = registry.get(call.tool_id()).unwrap();
        prop_assert!(ParameterValidator::new().validate(tool, call.arguments()).valid);
    }

    #[test]
    fn validation_is_idempotent(amount in -10.0f64..2000.0, with_recipient in any::<bool>()) {
        let registry = registry();
        let tool = registry.get("transfer_sol").unwrap();
        let mut params = Map::new();
        params.insert("amount".into(), json!(amount));
        if with_recipient {
            params.insert("recipient".into(), json!("Bob"));
        }

        let validator = ParameterValidator::new();
        let first = validator.validate(tool, &params);
        prop_assert_eq!(&first, &validator.validate(tool, &params));
        prop_assert_eq!(first.valid, with_recipient && amount > 0.0 && amount <= 1000.0);
    }
}
