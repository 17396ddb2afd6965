//! Session validation port for bearer token validation.
//!
//! This port defines the contract for validating access tokens and extracting
//! the caller's identity. Implementations exist for HS256 JWTs issued by this
//! service and for an in-memory token table used in tests.
//!
//! # Security Requirements
//!
//! Token-based implementations MUST validate:
//! - **Signature**: Token must be signed with the service key
//! - **Issuer (iss)**: Token must come from this service
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens.
///
/// # Contract
///
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
