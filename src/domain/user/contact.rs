//! Address book entries.

use serde::Serialize;

use crate::domain::foundation::{ContactId, ValidationError};

/// A saved payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub address: String,
    pub note: String,
}

/// Input for a new contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub address: String,
    pub note: String,
}

impl NewContact {
    /// Name and address are required and must be non-blank.
    pub fn new(
        name: Option<String>,
        address: Option<String>,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let address = required("address", address)?;
        Ok(Self {
            name,
            address,
            note: note.unwrap_or_default(),
        })
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl Contact {
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::empty_field(field)),
    }
}

/// The address book every new user starts with.
pub fn default_contacts() -> Vec<NewContact> {
    vec![
        NewContact {
            name: "Alice".into(),
            address: "So11111111111111111111111111111111111111112".into(),
            note: "朋友".into(),
        },
        NewContact {
            name: "Bob".into(),
            address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".into(),
            note: "同事".into(),
        },
        NewContact {
            name: "Charlie".into(),
            address: "11111111111111111111111111111111".into(),
            note: "家人".into(),
        },
    ]
}
