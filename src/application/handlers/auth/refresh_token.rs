//! RefreshTokenHandler - reissues a token for a still-valid principal.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{IssuedToken, TokenIssuer, UserRepository};

/// Handler for token refresh.
///
/// The account is looked up again, so a deleted or deactivated user cannot
/// keep extending a session. Claims are rebuilt from the stored account.
pub struct RefreshTokenHandler {
    users: Arc<dyn UserRepository>,
    issuer: Arc<dyn TokenIssuer>,
}

impl RefreshTokenHandler {
    pub fn new(users: Arc<dyn UserRepository>, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { users, issuer }
    }

    pub async fn handle(&self, principal: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        let account = self
            .users
            .find_by_username(&principal.username)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .filter(|account| account.is_active)
            .ok_or(AuthError::UserNotFound)?;

        let refreshed = AuthenticatedUser::new(account.id, account.username, account.role);
        self.issuer.issue(&refreshed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{HmacPasswordHasher, JwtTokenService};
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::ports::SessionValidator;
    use secrecy::SecretString;
    use std::time::Duration;

    fn tokens() -> Arc<JwtTokenService> {
        Arc::new(JwtTokenService::new(
            SecretString::new("refresh-test-secret-0123456789abcdef".into()),
            "voice-wallet",
            Duration::from_secs(600),
        ))
    }

    fn users() -> Arc<InMemoryUserRepository> {
        let hasher = HmacPasswordHasher::new(SecretString::new("pepper".into()));
        Arc::new(InMemoryUserRepository::with_demo_users(&hasher).unwrap())
    }

    #[tokio::test]
    async fn refresh_issues_token_for_known_user() {
        let tokens = tokens();
        let handler = RefreshTokenHandler::new(users(), tokens.clone());
        let principal = AuthenticatedUser::new(UserId::new(1), "testuser", Role::User);

        let issued = handler.handle(&principal).await.unwrap();
        let validated = tokens.validate(&issued.access_token).await.unwrap();
        assert_eq!(validated, principal);
    }

    #[tokio::test]
    async fn refresh_for_unknown_user_fails() {
        let handler = RefreshTokenHandler::new(users(), tokens());
        let ghost = AuthenticatedUser::new(UserId::new(99), "ghost", Role::User);

        assert_eq!(handler.handle(&ghost).await.unwrap_err(), AuthError::UserNotFound);
    }
}
