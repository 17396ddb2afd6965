//! UserRepository port for account storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, UserAccount};

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new account and assigns its id.
    ///
    /// Fails with `ErrorCode::UsernameTaken` if the username exists.
    async fn create(&self, user: NewUser) -> Result<UserAccount, DomainError>;

    /// Find account by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;

    /// Find account by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError>;
}
