//! Voice pipeline handlers.
//!
//! - `interpret` - classifier then confirmation gate
//! - `execute_tool` - ledger-backed tool executor

mod execute_tool;
mod interpret;

pub use execute_tool::{execution_request, LedgerToolExecutor, DEFAULT_LEDGER_TIMEOUT};
pub use interpret::{InterpretCommand, InterpretHandler, InterpretResult};
