//! Data transfer objects for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Role, Timestamp};
use crate::domain::user::UserAccount;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// OAuth2 password-grant style login form.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Public view of an account. The password digest never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: u64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub role: Role,
    pub created_at: Timestamp,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.value(),
            username: account.username,
            email: account.email,
            full_name: account.full_name,
            is_active: account.is_active,
            role: account.role,
            created_at: account.created_at,
        }
    }
}
