//! Per-user preferences, stored as a free-form JSON object.

use serde_json::{json, Map, Value};

/// Settings every new user starts with.
pub fn default_settings() -> Map<String, Value> {
    let defaults = json!({
        "theme": "dark",
        "language": "zh-CN",
        "voice_settings": {
            "rate": 1.0,
            "pitch": 1.0,
            "volume": 1.0
        },
        "notifications": {
            "transaction_notifications": true,
            "price_alerts": true,
            "security_alerts": true
        }
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Shallow merge: top-level keys in `update` replace those in `current`.
pub fn merge_settings(current: &mut Map<String, Value>, update: Map<String, Value>) {
    for (key, value) in update {
        current.insert(key, value);
    }
}
