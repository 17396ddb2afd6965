//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{issue_token, refresh_token, register, AuthHandlers};

/// Creates the auth router, mounted at `/{version}/api/auth`.
///
/// `/token` and `/register` are public; `/refresh` needs a valid bearer token.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/token", post(issue_token))
        .route("/refresh", post(refresh_token))
        .route("/register", post(register))
        .with_state(handlers)
}
