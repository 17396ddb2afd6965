//! HTTP adapters - REST API implementations.
//!
//! Each module has its own handler state and router; [`api_router`] mounts
//! them under `/{version}/api` and [`with_middleware`] adds the cross-cutting
//! tower layers.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod tools;
pub mod user;
pub mod voice;
pub mod wallet;

use std::any::Any;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::domain::foundation::Timestamp;

pub use auth::{auth_routes, AuthHandlers};
pub use error::ErrorResponse;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use tools::{tools_routes, ToolsHandlers};
pub use user::{user_routes, UserHandlers};
pub use voice::{voice_routes, VoiceHandlers};
pub use wallet::{wallet_routes, WalletHandlers};

/// Handler state for every API module.
#[derive(Clone)]
pub struct ApiHandlers {
    pub auth: AuthHandlers,
    pub voice: VoiceHandlers,
    pub tools: ToolsHandlers,
    pub wallet: WalletHandlers,
    pub user: UserHandlers,
}

/// Builds the full route tree under `prefix` (e.g. `/v1/api`, see
/// [`ServerConfig::api_prefix`]).
///
/// # Routes
///
/// - `GET /`, `GET /health` - Service status
/// - `/{version}/api/auth/*` - Login, refresh, registration
/// - `/{version}/api/interpret`, `/{version}/api/execute` - Voice pipeline
/// - `/{version}/api/tools/*` - Tool catalog
/// - `/{version}/api/blockchain/*` - Wallet
/// - `/{version}/api/user/*` - Profile, contacts, settings
///
/// The auth middleware runs on every route; handlers that need a principal
/// use [`RequireAuth`].
pub fn api_router(prefix: &str, handlers: ApiHandlers, validator: AuthState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(&format!("{prefix}/auth"), auth_routes(handlers.auth))
        .nest(prefix, voice_routes(handlers.voice))
        .nest(&format!("{prefix}/tools"), tools_routes(handlers.tools))
        .nest(&format!("{prefix}/blockchain"), wallet_routes(handlers.wallet))
        .nest(&format!("{prefix}/user"), user_routes(handlers.user))
        .layer(axum::middleware::from_fn_with_state(validator, auth_middleware))
}

/// Wraps a router with tracing, request ids, panic recovery, timeout and CORS.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(cors_layer(&config.cors_origins_list()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Voice Wallet API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Timestamp::now().to_rfc3339()
    }))
}

/// No configured origins means any origin is allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(cors::Any);

    if origins.is_empty() {
        return layer.allow_origin(cors::Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Internal server error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("ledger state corrupted")
    }

    fn config() -> ServerConfig {
        ServerConfig::default()
    }

    #[tokio::test]
    async fn panics_become_generic_500() {
        let app = with_middleware(Router::new().route("/boom", get(boom)), &config());

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "detail": "Internal server error" }));
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = with_middleware(Router::new().route("/health", get(health)), &config());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let app = with_middleware(Router::new().route("/health", get(health)), &config());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/health")
            .header("origin", origin)
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn invalid_cors_origins_are_skipped() {
        let origins = ["https://wallet.example".to_string(), "bad\norigin".to_string()];
        let app = Router::new()
            .route("/health", get(health))
            .layer(cors_layer(&origins));

        let allowed = app
            .clone()
            .oneshot(preflight("https://wallet.example"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers().get("access-control-allow-origin").unwrap(),
            "https://wallet.example"
        );

        let other = app.oneshot(preflight("https://evil.example")).await.unwrap();
        assert!(other.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn empty_origin_list_allows_any_origin() {
        let app = Router::new()
            .route("/health", get(health))
            .layer(cors_layer(&[]));

        let response = app.oneshot(preflight("https://anywhere.example")).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
