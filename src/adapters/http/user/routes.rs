//! HTTP routes for user endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    add_contact, delete_contact, get_config, get_profile, get_settings, list_contacts,
    update_config, update_contact, update_settings, UserHandlers,
};

/// Creates the user router, mounted at `/{version}/api/user`.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/config", get(get_config).put(update_config))
        .route("/contacts", get(list_contacts).post(add_contact))
        .route("/contacts/:contact_id", put(update_contact).delete(delete_contact))
        .route("/settings", get(get_settings).put(update_settings))
        .with_state(handlers)
}
