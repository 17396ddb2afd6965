//! Wallet HTTP adapter - direct balance, transfer and history endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WalletHandlers;
pub use routes::wallet_routes;
