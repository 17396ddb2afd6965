//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `tools` - Tool catalog, parameter schemas, validator and result envelope
//! - `intent` - Utterance classification and the confirmation gate
//! - `ledger` - Wallet balances, transfers and transaction records
//! - `user` - Accounts, contacts and settings

pub mod foundation;
pub mod intent;
pub mod ledger;
pub mod tools;
pub mod user;
