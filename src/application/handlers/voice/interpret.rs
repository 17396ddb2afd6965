//! InterpretHandler - turns an utterance into a gated intent result.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, SessionId};
use crate::domain::intent::{ConfirmationGate, IntentClassifier, IntentResult};

/// Command to interpret one utterance.
#[derive(Debug, Clone)]
pub struct InterpretCommand {
    pub query: String,
    /// Client-supplied session; a fresh one is generated when absent or blank.
    pub session_id: Option<String>,
    pub principal: Option<AuthenticatedUser>,
}

/// Result of interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretResult {
    pub intent: IntentResult,
    pub session_id: SessionId,
}

/// Handler running the classifier and then the confirmation gate.
#[derive(Debug)]
pub struct InterpretHandler {
    classifier: Arc<IntentClassifier>,
    gate: Arc<ConfirmationGate>,
}

impl InterpretHandler {
    pub fn new(classifier: Arc<IntentClassifier>, gate: Arc<ConfirmationGate>) -> Self {
        Self { classifier, gate }
    }

    pub fn handle(&self, cmd: InterpretCommand) -> InterpretResult {
        let session_id = SessionId::or_generate(cmd.session_id);
        let intent = self.gate.annotate(self.classifier.classify(&cmd.query));

        tracing::info!(
            session_id = %session_id,
            principal = cmd.principal.as_ref().map(|p| p.username.as_str()).unwrap_or("anonymous"),
            intent = intent.intent.as_str(),
            confidence = intent.confidence,
            requires_confirmation = intent.requires_confirmation,
            "Utterance interpreted"
        );

        InterpretResult { intent, session_id }
    }
}
