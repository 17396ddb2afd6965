//! Ledger adapters.
//!
//! - `mock` - In-memory demo wallet
//! - `solana_rpc` - Read-only Solana JSON-RPC ledger

mod mock;
mod solana_rpc;

pub use mock::{
    MockLedgerService, DEFAULT_SOL_USD_PRICE, MOCK_SOL_BALANCE, MOCK_USDC_BALANCE,
    MOCK_WALLET_ADDRESS,
};
pub use solana_rpc::SolanaRpcLedger;
