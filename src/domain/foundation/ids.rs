//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Correlation identifier for a voice conversation.
///
/// Clients may supply any string; the gateway generates a UUID v4 only when
/// none is provided. The value is echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a SessionId from a client-supplied value.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Creates a fresh random SessionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps the supplied value as-is, generating one only when absent.
    pub fn or_generate(candidate: Option<String>) -> Self {
        candidate.map(Self).unwrap_or_else(Self::generate)
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier for a registered wallet user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a UserId from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("user_id", "must be a positive integer"))
    }
}

/// Identifier of an address-book entry, unique within one user's contacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Creates a ContactId from a string value.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("contact_id"));
        }
        Ok(Self(id))
    }

    /// Creates a ContactId from a sequence number.
    pub fn from_sequence(n: u64) -> Self {
        Self(n.to_string())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_rejects_blank() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn session_id_preserves_client_value() {
        let id = SessionId::new("s1").unwrap();
        assert_eq!(id.as_str(), "s1");
        assert_eq!(id.to_string(), "s1");
    }

    #[test]
    fn session_id_generate_is_uuid() {
        let id = SessionId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn session_id_or_generate_keeps_any_supplied_value() {
        assert_eq!(SessionId::or_generate(Some("abc".into())).as_str(), "abc");

        assert_eq!(SessionId::or_generate(Some("  ".into())).as_str(), "  ");
        assert_eq!(SessionId::or_generate(Some(String::new())).as_str(), "");

        let generated = SessionId::or_generate(None);
        assert!(Uuid::parse_str(generated.as_str()).is_ok());
    }

    #[test]
    fn user_id_parses_from_string() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn contact_id_from_sequence() {
        assert_eq!(ContactId::from_sequence(3).as_str(), "3");
        assert!(ContactId::new("").is_err());
    }
}
