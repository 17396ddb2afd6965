//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the voice wallet domain.

mod auth;
mod currency;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use currency::Currency;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContactId, SessionId, UserId};
pub use timestamp::Timestamp;
