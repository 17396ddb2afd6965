//! Registered wallet user.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{Role, Timestamp, UserId, ValidationError};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const PASSWORD_MAX_CHARS: usize = 50;

static USERNAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\x{4e00}-\x{9fa5}]+$").expect("username pattern is valid"));

/// A stored user account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Registration input before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

/// Checks a username: 3 to 20 letters, digits, underscores or CJK ideographs.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::empty_field("username"));
    }
    let chars = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::length_out_of_range(
            "username",
            USERNAME_MIN_CHARS,
            USERNAME_MAX_CHARS,
            chars,
        ));
    }
    if !USERNAME_CHARS.is_match(username) {
        return Err(ValidationError::invalid_format(
            "username",
            "only letters, digits, underscores and Chinese characters are allowed",
        ));
    }
    Ok(())
}

/// Checks a password: 6 to 50 characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::empty_field("password"));
    }
    let chars = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::length_out_of_range(
            "password",
            PASSWORD_MIN_CHARS,
            PASSWORD_MAX_CHARS,
            chars,
        ));
    }
    Ok(())
}
