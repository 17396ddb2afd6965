//! Password hashing port.

use crate::domain::foundation::AuthError;

/// Derives and checks stored password digests.
pub trait PasswordHasher: Send + Sync {
    /// Returns an encoded digest that embeds its own salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Constant-time check of `password` against an encoded digest.
    ///
    /// Malformed digests never verify.
    fn verify(&self, password: &str, encoded: &str) -> bool;
}
