//! ContactRepository port for per-user address books.

use async_trait::async_trait;

use crate::domain::foundation::{ContactId, DomainError, UserId};
use crate::domain::user::{Contact, ContactPatch, NewContact};

/// Repository for address books, one per user.
///
/// A user with no stored book sees the default contacts.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts, in insertion order.
    async fn list(&self, user: UserId) -> Result<Vec<Contact>, DomainError>;

    /// Adds a contact and assigns its id.
    async fn add(&self, user: UserId, contact: NewContact) -> Result<Contact, DomainError>;

    /// Applies a partial update. Fails with `ErrorCode::ContactNotFound`.
    async fn update(
        &self,
        user: UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, DomainError>;

    /// Removes and returns a contact. Fails with `ErrorCode::ContactNotFound`.
    async fn delete(&self, user: UserId, id: &ContactId) -> Result<Contact, DomainError>;

    /// Replaces the whole book.
    async fn replace_all(
        &self,
        user: UserId,
        contacts: Vec<NewContact>,
    ) -> Result<Vec<Contact>, DomainError>;
}
