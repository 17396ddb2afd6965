//! RegisterHandler - creates a new `user`-role account.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Role};
use crate::domain::user::{validate_password, validate_username, NewUser, UserAccount};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register an account.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Handler for self-service registration.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<UserAccount, DomainError> {
        validate_username(&cmd.username)?;
        validate_password(&cmd.password)?;

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        let account = self
            .users
            .create(NewUser {
                username: cmd.username,
                email: cmd.email,
                full_name: cmd.full_name,
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!(user_id = %account.id, username = %account.username, "User registered");
        Ok(account)
    }
}
