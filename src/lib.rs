//! Voice Wallet - voice assistant gateway for a Solana wallet companion device.
//!
//! Free-text utterances are classified into wallet intents, gated for user
//! confirmation when they would move funds, and executed as tool calls
//! against a ledger service.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
