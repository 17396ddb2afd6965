//! Data transfer objects for voice endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::SessionId;
use crate::domain::intent::IntentResult;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to interpret an utterance.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpretRequest {
    /// Transcribed user speech
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Opaque client context, accepted and ignored
    #[serde(default)]
    pub context: Option<Value>,
}

/// Request to execute a confirmed tool call.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRequest {
    pub tool_id: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Intent result with the session it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretResponse {
    #[serde(flatten)]
    pub result: IntentResult,
    pub session_id: SessionId,
}
