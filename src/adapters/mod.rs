//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT tokens, password digests, test session validator
//! - `http` - axum REST API
//! - `ledger` - In-memory wallet and Solana JSON-RPC ledger
//! - `memory` - In-memory user, contact and settings repositories

pub mod auth;
pub mod http;
pub mod ledger;
pub mod memory;
