//! HTTP routes for wallet endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_address, get_balance, list_transactions, transfer, WalletHandlers};

/// Creates the wallet router, mounted at `/{version}/api/blockchain`.
pub fn wallet_routes(handlers: WalletHandlers) -> Router {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/transfer", post(transfer))
        .route("/transactions", get(list_transactions))
        .route("/address", get(get_address))
        .with_state(handlers)
}
