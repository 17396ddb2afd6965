//! HTTP routes for voice endpoints.

use axum::{routing::post, Router};

use super::handlers::{execute, interpret, VoiceHandlers};

/// Creates the voice router.
///
/// # Routes
///
/// - `POST /interpret` - Utterance to gated intent result
/// - `POST /execute` - Confirmed tool call to execution envelope
pub fn voice_routes(handlers: VoiceHandlers) -> Router {
    Router::new()
        .route("/interpret", post(interpret))
        .route("/execute", post(execute))
        .with_state(handlers)
}
