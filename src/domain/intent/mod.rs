//! Intent - utterance classification and confirmation gating.
//!
//! ## Pipeline
//!
//! 1. [`IntentClassifier`] runs an ordered chain of [`IntentDetector`]s
//! 2. [`ConfirmationGate`] forces confirmation for mutating tool calls
//!
//! Both stages are synchronous and pure.

mod balance;
mod confirmation;
mod detector;
mod history;
mod result;
mod transfer;

pub use balance::{BalanceDetector, BALANCE_CONFIDENCE, BALANCE_KEYWORDS};
pub use confirmation::ConfirmationGate;
pub use detector::{IntentClassifier, IntentDetector, Utterance};
pub use history::{HistoryDetector, HISTORY_CONFIDENCE, HISTORY_KEYWORDS};
pub use result::{Intent, IntentResult, FALLBACK_CONFIDENCE, FALLBACK_GREETING};
pub use transfer::{
    transfer_confirmation_message, TransferDetector, TransferPhrase, TRANSFER_CONFIDENCE,
};
