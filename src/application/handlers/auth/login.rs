//! LoginHandler - exchanges username and password for an access token.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::UserAccount;
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub account: UserAccount,
}

/// Handler for password logins.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        let account = self
            .users
            .find_by_username(&cmd.username)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        // Unknown user and wrong password answer the same way.
        let account = match account {
            Some(account)
                if account.is_active && self.hasher.verify(&cmd.password, &account.password_hash) =>
            {
                account
            }
            _ => {
                tracing::info!(username = %cmd.username, "Login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let principal = AuthenticatedUser::new(account.id, account.username.clone(), account.role);
        let token = self.issuer.issue(&principal)?;

        tracing::info!(user_id = %account.id, username = %account.username, "User logged in");
        Ok(LoginResult { token, account })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{HmacPasswordHasher, JwtTokenService};
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::Role;
    use crate::ports::SessionValidator;
    use secrecy::SecretString;
    use std::time::Duration;

    struct Fixture {
        handler: LoginHandler,
        tokens: Arc<JwtTokenService>,
    }

    fn fixture() -> Fixture {
        let hasher = Arc::new(HmacPasswordHasher::new(SecretString::new("pepper".into())));
        let users = Arc::new(InMemoryUserRepository::with_demo_users(hasher.as_ref()).unwrap());
        let tokens = Arc::new(JwtTokenService::new(
            SecretString::new("login-test-secret-0123456789abcdef".into()),
            "voice-wallet",
            Duration::from_secs(1800),
        ));
        Fixture {
            handler: LoginHandler::new(users, hasher, tokens.clone()),
            tokens,
        }
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn demo_user_logs_in_with_valid_token() {
        let fixture = fixture();
        let result = fixture
            .handler
            .handle(login("developer", "dev123456"))
            .await
            .unwrap();

        assert_eq!(result.account.username, "developer");
        assert_eq!(result.token.expires_in, 1800);

        let principal = fixture.tokens.validate(&result.token.access_token).await.unwrap();
        assert_eq!(principal.id.value(), 2);
        assert_eq!(principal.role, Role::Developer);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let err = fixture()
            .handler
            .handle(login("testuser", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn unknown_user_is_rejected_the_same_way() {
        let err = fixture()
            .handler
            .handle(login("ghost", "password123"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
