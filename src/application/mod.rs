//! Application layer - command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers receive their collaborators as `Arc<dyn Port>` and hold no
//! process-wide state.

pub mod handlers;

pub use handlers::{
    execution_request, InterpretCommand, InterpretHandler, InterpretResult, LedgerToolExecutor,
    LoginCommand, LoginHandler, LoginResult, RefreshTokenHandler, RegisterCommand,
    RegisterHandler, DEFAULT_LEDGER_TIMEOUT,
};
