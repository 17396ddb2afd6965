//! Integration tests for the assembled HTTP application.
//!
//! These tests drive the full router built by the composition root:
//! 1. Login issues a bearer token for a seeded demo account
//! 2. The voice pipeline classifies, gates and executes
//! 3. Wallet endpoints map execution failures to HTTP statuses
//! 4. A slow ledger is cut off by the executor's call timeout

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use voice_wallet::adapters::ledger::MockLedgerService;
use voice_wallet::bootstrap::{build_app, build_app_with_ledger};
use voice_wallet::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

const PREFIX: &str = "/v1/api";

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = SecretString::new("integration-test-secret".into());
    config
}

fn app() -> Router {
    build_app(&config()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(format!("{PREFIX}/auth/token"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap();
    send(app, request).await
}

async fn token(app: &Router) -> String {
    let (status, body) = login(app, "testuser", "password123").await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["access_token"].as_str().unwrap().to_string()
}

fn post_json(path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("{PREFIX}{path}"))
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

// =============================================================================
// Service status
// =============================================================================

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(&app(), get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = send(&app(), get("/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn login_issues_bearer_token() {
    let (status, body) = login(&app(), "testuser", "password123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["username"], "testuser");
    assert!(body["expires_in"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (status, _) = login(&app(), "testuser", "wrong-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn voice_endpoints_require_token() {
    let request = post_json("/interpret", None, json!({ "query": "查询余额" }));
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let request = post_json("/interpret", Some("not-a-jwt"), json!({ "query": "查询余额" }));
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn registered_user_can_log_in() {
    let app = app();
    let request = post_json(
        "/auth/register",
        None,
        json!({ "username": "new_user", "password": "secret123", "full_name": "新用户" }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "new_user");
    assert_eq!(body["role"], "user");
    assert!(body.get("password_hash").is_none());

    let (status, body) = login(&app, "new_user", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "new_user");
}

#[tokio::test]
async fn duplicate_registration_is_400() {
    let request = post_json(
        "/auth/register",
        None,
        json!({ "username": "testuser", "password": "password123" }),
    );
    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn refresh_returns_new_token() {
    let app = app();
    let token = token(&app).await;

    let request = post_json("/auth/refresh", Some(&token), json!({}));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
}

// =============================================================================
// Voice pipeline
// =============================================================================

#[tokio::test]
async fn transfer_utterance_requires_confirmation() {
    let app = app();
    let token = token(&app).await;

    let request = post_json("/interpret", Some(&token), json!({ "query": "向小明转账10" }));
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "transfer");
    assert_eq!(body["requires_confirmation"], true);
    assert_eq!(body["confirmation_message"], "您要向 小明 转账 10 SOL，是否确认？");
    assert_eq!(body["tool_calls"][0]["tool_id"], "transfer_sol");
    assert_eq!(body["tool_calls"][0]["arguments"]["recipient"], "小明");
    assert!(body["session_id"].is_string());
}

#[tokio::test]
async fn balance_utterance_runs_without_confirmation() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/interpret",
        Some(&token),
        json!({ "query": "查询我的余额", "session_id": "sess-1" }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "query_balance");
    assert_eq!(body["requires_confirmation"], false);
    assert!(body.get("confirmation_message").is_none());
    assert_eq!(body["session_id"], "sess-1");
}

#[tokio::test]
async fn unknown_utterance_gets_greeting() {
    let app = app();
    let token = token(&app).await;

    let request = post_json("/interpret", Some(&token), json!({ "query": "今天天气怎么样" }));
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "direct_response");
    assert_eq!(body["confidence"], 0.3);
    assert!(body["direct_message"].is_string());
    assert!(body.get("tool_calls").is_none());
}

#[tokio::test]
async fn execute_unknown_tool_reports_not_found_in_envelope() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({ "tool_id": "nonexistent_tool", "parameters": {} }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "TOOL_NOT_FOUND");
}

#[tokio::test]
async fn execute_transfer_settles_and_debits_balance() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({
            "tool_id": "transfer_sol",
            "parameters": { "recipient": "Bob", "amount": 10 },
            "session_id": "sess-transfer"
        }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true, "unexpected envelope: {body}");
    assert_eq!(body["session_id"], "sess-transfer");
    assert!(body["data"]["transaction_hash"]
        .as_str()
        .unwrap()
        .starts_with("mock_tx_"));

    let (status, body) = send(
        &app,
        get(&format!("{PREFIX}/blockchain/balance"), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], 32.5);
}

#[tokio::test]
async fn execute_with_missing_parameter_reports_invalid_parameters() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({ "tool_id": "transfer_sol", "parameters": { "recipient": "Bob" } }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETERS");
}

#[tokio::test]
async fn execute_with_malformed_body_answers_envelope() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({ "tool_id": "transfer_sol", "parameters": ["Bob", 10], "session_id": "s1" }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETERS");
    assert_eq!(body["error"]["message"], "请求格式无效");
    assert!(!body.to_string().contains("deserialize"));
}

#[tokio::test]
async fn execute_echoes_blank_session_id_verbatim() {
    let app = app();
    let token = token(&app).await;

    for session_id in [" ", ""] {
        let request = post_json(
            "/execute",
            Some(&token),
            json!({ "tool_id": "query_balance", "parameters": {}, "session_id": session_id }),
        );
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session_id"], session_id);
    }
}

#[tokio::test]
async fn execute_without_session_id_generates_one() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({ "tool_id": "query_balance", "parameters": {} }),
    );
    let (_, body) = send(&app, request).await;

    assert!(uuid::Uuid::parse_str(body["session_id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn slow_ledger_times_out() {
    let mut config = config();
    config.ledger.call_timeout_ms = 50;
    let ledger = Arc::new(MockLedgerService::new().with_delay(Duration::from_millis(500)));
    let app = build_app_with_ledger(&config, ledger).unwrap();
    let token = token(&app).await;

    let request = post_json(
        "/execute",
        Some(&token),
        json!({ "tool_id": "query_balance", "parameters": {} }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "LEDGER_TIMEOUT");
}

// =============================================================================
// Wallet
// =============================================================================

#[tokio::test]
async fn wallet_transfer_of_zero_is_400() {
    let app = app();
    let token = token(&app).await;

    let request = post_json(
        "/blockchain/transfer",
        Some(&token),
        json!({ "recipient": "Bob", "amount": 0 }),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PARAMETERS");
}

#[tokio::test]
async fn wallet_history_lists_seeded_transactions() {
    let app = app();
    let token = token(&app).await;

    let (status, body) = send(
        &app,
        get(&format!("{PREFIX}/blockchain/transactions?limit=2"), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let transactions = body.as_array().unwrap();
    assert_eq!(transactions.len(), 2);
}

#[tokio::test]
async fn wallet_address_reports_demo_wallet() {
    let app = app();
    let token = token(&app).await;

    let (status, body) = send(
        &app,
        get(&format!("{PREFIX}/blockchain/address"), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["network"], "devnet");
    assert!(body["address"].is_string());
}

// =============================================================================
// Tools and user data
// =============================================================================

#[tokio::test]
async fn tool_catalog_lists_builtin_tools() {
    let app = app();
    let token = token(&app).await;

    let (status, body) = send(&app, get(&format!("{PREFIX}/tools"), Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn contacts_are_seeded_per_user() {
    let app = app();
    let token = token(&app).await;

    let (status, body) = send(
        &app,
        get(&format!("{PREFIX}/user/contacts"), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}
