//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod auth;
pub mod voice;

pub use auth::{
    LoginCommand, LoginHandler, LoginResult, RefreshTokenHandler, RegisterCommand,
    RegisterHandler,
};
pub use voice::{
    execution_request, InterpretCommand, InterpretHandler, InterpretResult, LedgerToolExecutor,
    DEFAULT_LEDGER_TIMEOUT,
};
