//! In-memory address books, one per user.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{ContactId, DomainError, ErrorCode, UserId};
use crate::domain::user::{default_contacts, Contact, ContactPatch, NewContact};
use crate::ports::ContactRepository;

#[derive(Debug)]
struct AddressBook {
    next_id: u64,
    contacts: Vec<Contact>,
}

impl AddressBook {
    fn from_entries(entries: Vec<NewContact>) -> Self {
        let mut book = Self {
            next_id: 1,
            contacts: Vec::new(),
        };
        for entry in entries {
            book.push(entry);
        }
        book
    }

    fn push(&mut self, entry: NewContact) -> Contact {
        let contact = Contact {
            id: ContactId::from_sequence(self.next_id),
            name: entry.name,
            address: entry.address,
            note: entry.note,
        };
        self.next_id += 1;
        self.contacts.push(contact.clone());
        contact
    }

    fn position(&self, id: &ContactId) -> Result<usize, DomainError> {
        self.contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ContactNotFound, format!("Contact {} not found", id))
            })
    }
}

/// Address books keyed by user id. A user's book is created from the default
/// contacts on first access.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    books: RwLock<HashMap<UserId, AddressBook>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn book_for(books: &mut HashMap<UserId, AddressBook>, user: UserId) -> &mut AddressBook {
    books
        .entry(user)
        .or_insert_with(|| AddressBook::from_entries(default_contacts()))
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self, user: UserId) -> Result<Vec<Contact>, DomainError> {
        let mut books = self.books.write().await;
        Ok(book_for(&mut books, user).contacts.clone())
    }

    async fn add(&self, user: UserId, contact: NewContact) -> Result<Contact, DomainError> {
        let mut books = self.books.write().await;
        Ok(book_for(&mut books, user).push(contact))
    }

    async fn update(
        &self,
        user: UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, DomainError> {
        let mut books = self.books.write().await;
        let book = book_for(&mut books, user);
        let index = book.position(id)?;
        let contact = &mut book.contacts[index];
        contact.apply(patch);
        Ok(contact.clone())
    }

    async fn delete(&self, user: UserId, id: &ContactId) -> Result<Contact, DomainError> {
        let mut books = self.books.write().await;
        let book = book_for(&mut books, user);
        let index = book.position(id)?;
        Ok(book.contacts.remove(index))
    }

    async fn replace_all(
        &self,
        user: UserId,
        contacts: Vec<NewContact>,
    ) -> Result<Vec<Contact>, DomainError> {
        let mut books = self.books.write().await;
        let book = AddressBook::from_entries(contacts);
        let listed = book.contacts.clone();
        books.insert(user, book);
        Ok(listed)
    }
}
