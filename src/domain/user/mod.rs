//! User - accounts, address book and preferences.

mod account;
mod contact;
mod settings;

pub use account::{
    validate_password, validate_username, NewUser, UserAccount, PASSWORD_MAX_CHARS,
    PASSWORD_MIN_CHARS, USERNAME_MAX_CHARS, USERNAME_MIN_CHARS,
};
pub use contact::{default_contacts, Contact, ContactPatch, NewContact};
pub use settings::{default_settings, merge_settings};
