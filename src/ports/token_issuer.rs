//! Token issuance port.

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

/// Signs access tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError>;
}
