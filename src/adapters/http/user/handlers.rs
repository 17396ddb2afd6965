//! HTTP handlers for user endpoints.
//!
//! Contacts and settings are keyed by the authenticated user's id.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::adapters::http::auth::AccountResponse;
use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::{ContactId, DomainError, Timestamp};
use crate::domain::user::NewContact;
use crate::ports::{ContactRepository, SettingsRepository, UserRepository};

use super::dto::{
    ConfigResponse, ConfigUpdatedResponse, ContactBody, ContactCommandResponse, ContactsResponse,
    SettingsUpdatedResponse, UpdateConfigRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    users: Arc<dyn UserRepository>,
    contacts: Arc<dyn ContactRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl UserHandlers {
    pub fn new(
        users: Arc<dyn UserRepository>,
        contacts: Arc<dyn ContactRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            users,
            contacts,
            settings,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Profile and config
// ════════════════════════════════════════════════════════════════════════════

/// GET /user/profile
pub async fn get_profile(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.users.find_by_id(user.id).await {
        Ok(Some(account)) => Json(AccountResponse::from(account)).into_response(),
        Ok(None) => ErrorResponse::not_found("User", &user.id.to_string())
            .into_response_with(StatusCode::NOT_FOUND),
        Err(e) => domain_error_response(e),
    }
}

/// GET /user/config
pub async fn get_config(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let config = async {
        Ok::<_, DomainError>(ConfigResponse {
            contacts: handlers.contacts.list(user.id).await?,
            settings: handlers.settings.get(user.id).await?,
        })
    };

    match config.await {
        Ok(config) => Json(config).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /user/config - Merge settings and replace the contact book
pub async fn update_config(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateConfigRequest>,
) -> Response {
    let contacts = match req.contacts {
        None => None,
        Some(bodies) => {
            match bodies
                .into_iter()
                .map(ContactBody::into_new_contact)
                .collect::<Result<Vec<NewContact>, _>>()
            {
                Ok(contacts) => Some(contacts),
                Err(e) => return domain_error_response(e.into()),
            }
        }
    };

    let update = async {
        if let Some(settings) = req.settings {
            handlers.settings.merge(user.id, settings).await?;
        }
        if let Some(contacts) = contacts {
            handlers.contacts.replace_all(user.id, contacts).await?;
        }
        Ok::<_, DomainError>(())
    };

    match update.await {
        Ok(()) => {
            tracing::info!(user_id = %user.id, "User config updated");
            Json(ConfigUpdatedResponse {
                success: true,
                message: "配置更新成功".to_string(),
                updated_at: Timestamp::now(),
            })
            .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Contacts
// ════════════════════════════════════════════════════════════════════════════

/// GET /user/contacts
pub async fn list_contacts(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.contacts.list(user.id).await {
        Ok(contacts) => Json(ContactsResponse {
            total: contacts.len(),
            contacts,
        })
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /user/contacts
pub async fn add_contact(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<ContactBody>,
) -> Response {
    let contact = match body.into_new_contact() {
        Ok(contact) => contact,
        Err(e) => return domain_error_response(e.into()),
    };

    match handlers.contacts.add(user.id, contact).await {
        Ok(contact) => Json(ContactCommandResponse {
            success: true,
            message: "联系人添加成功".to_string(),
            contact: Some(contact),
            deleted_contact: None,
        })
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /user/contacts/:contact_id
pub async fn update_contact(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Path(contact_id): Path<String>,
    Json(body): Json<ContactBody>,
) -> Response {
    let Ok(id) = ContactId::new(contact_id.clone()) else {
        return contact_not_found(&contact_id);
    };

    match handlers.contacts.update(user.id, &id, body.into_patch()).await {
        Ok(contact) => Json(ContactCommandResponse {
            success: true,
            message: "联系人更新成功".to_string(),
            contact: Some(contact),
            deleted_contact: None,
        })
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /user/contacts/:contact_id
pub async fn delete_contact(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Path(contact_id): Path<String>,
) -> Response {
    let Ok(id) = ContactId::new(contact_id.clone()) else {
        return contact_not_found(&contact_id);
    };

    match handlers.contacts.delete(user.id, &id).await {
        Ok(contact) => Json(ContactCommandResponse {
            success: true,
            message: "联系人删除成功".to_string(),
            contact: None,
            deleted_contact: Some(contact),
        })
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Settings
// ════════════════════════════════════════════════════════════════════════════

/// GET /user/settings
pub async fn get_settings(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.settings.get(user.id).await {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /user/settings - Shallow merge
pub async fn update_settings(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Json(update): Json<Map<String, Value>>,
) -> Response {
    match handlers.settings.merge(user.id, update).await {
        Ok(settings) => Json(SettingsUpdatedResponse {
            success: true,
            message: "设置更新成功".to_string(),
            settings,
        })
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

fn contact_not_found(id: &str) -> Response {
    ErrorResponse::not_found("Contact", id).into_response_with(StatusCode::NOT_FOUND)
}
