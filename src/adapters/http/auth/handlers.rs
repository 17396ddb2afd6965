//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::auth::{
    LoginCommand, LoginHandler, RefreshTokenHandler, RegisterCommand, RegisterHandler,
};
use crate::domain::foundation::AuthError;

use super::dto::{AccountResponse, RefreshResponse, RegisterRequest, TokenForm, TokenResponse};

const TOKEN_TYPE: &str = "bearer";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
    refresh_handler: Arc<RefreshTokenHandler>,
    register_handler: Arc<RegisterHandler>,
}

impl AuthHandlers {
    pub fn new(
        login_handler: Arc<LoginHandler>,
        refresh_handler: Arc<RefreshTokenHandler>,
        register_handler: Arc<RegisterHandler>,
    ) -> Self {
        Self {
            login_handler,
            refresh_handler,
            register_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /auth/token - Password login
pub async fn issue_token(
    State(handlers): State<AuthHandlers>,
    Form(form): Form<TokenForm>,
) -> Response {
    let cmd = LoginCommand {
        username: form.username,
        password: form.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => Json(TokenResponse {
            access_token: result.token.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: result.token.expires_in,
            user_id: result.account.id.value(),
            username: result.account.username,
            role: result.account.role,
        })
        .into_response(),
        Err(e) => auth_error_response(e),
    }
}

/// POST /auth/refresh - Reissue a token for the current principal
pub async fn refresh_token(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.refresh_handler.handle(&user).await {
        Ok(token) => Json(RefreshResponse {
            access_token: token.access_token,
            token_type: TOKEN_TYPE.to_string(),
        })
        .into_response(),
        Err(e) => auth_error_response(e),
    }
}

/// POST /auth/register - Create a `user`-role account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterCommand {
        username: req.username,
        password: req.password,
        email: req.email,
        full_name: req.full_name,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(account) => (StatusCode::OK, Json(AccountResponse::from(account))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn auth_error_response(error: AuthError) -> Response {
    let (status, code) = match &error {
        AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
        AuthError::UserNotFound => (StatusCode::UNAUTHORIZED, "USER_NOT_FOUND"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED"),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (StatusCode::SERVICE_UNAVAILABLE, "AUTH_UNAVAILABLE")
        }
    };

    (
        status,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(serde_json::json!({
            "error": error.to_string(),
            "code": code
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_credentials_are_401_with_challenge() {
        let response = auth_error_response(AuthError::InvalidCredentials);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    }

    #[test]
    fn outage_is_503() {
        let response = auth_error_response(AuthError::service_unavailable("store down"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
