//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Execution Ports
//!
//! - `ToolExecutor` - Runs a confirmed tool call and reports the outcome
//! - `LedgerService` - Wallet balance, transfer and history
//!
//! ## Identity Ports
//!
//! - `SessionValidator` - Validates bearer tokens
//! - `TokenIssuer` - Signs access tokens
//! - `PasswordHasher` - Derives and checks password digests
//!
//! ## Storage Ports
//!
//! - `UserRepository` - Accounts
//! - `ContactRepository` - Per-user address books
//! - `SettingsRepository` - Per-user preferences

mod contact_repository;
mod ledger_service;
mod password_hasher;
mod session_validator;
mod settings_repository;
mod token_issuer;
mod tool_executor;
mod user_repository;

pub use contact_repository::ContactRepository;
pub use ledger_service::{LedgerError, LedgerService};
pub use password_hasher::PasswordHasher;
pub use session_validator::SessionValidator;
pub use settings_repository::SettingsRepository;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use tool_executor::{ToolExecutionRequest, ToolExecutor};
pub use user_repository::UserRepository;
