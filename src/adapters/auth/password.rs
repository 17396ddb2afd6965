//! Salted HMAC-SHA256 password digests.
//!
//! Encoded form: `hmac-sha256$<salt hex>$<digest hex>`. The digest is
//! HMAC-SHA256 keyed with the service pepper over `salt || password`, so a
//! leaked user table alone is not enough to test guesses offline.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

type HmacSha256 = Hmac<Sha256>;

const SCHEME: &str = "hmac-sha256";

/// Password hasher keyed with a server-side pepper.
pub struct HmacPasswordHasher {
    pepper: SecretString,
}

impl HmacPasswordHasher {
    pub fn new(pepper: SecretString) -> Self {
        Self { pepper }
    }

    fn digest(&self, salt: &[u8], password: &str) -> Result<Vec<u8>, AuthError> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.expose_secret().as_bytes())
            .map_err(|e| AuthError::service_unavailable(format!("password hasher key: {e}")))?;
        mac.update(salt);
        mac.update(password.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl PasswordHasher for HmacPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = Uuid::new_v4();
        let digest = self.digest(salt.as_bytes(), password)?;
        Ok(format!(
            "{SCHEME}${}${}",
            to_hex(salt.as_bytes()),
            to_hex(&digest)
        ))
    }

    fn verify(&self, password: &str, encoded: &str) -> bool {
        let mut parts = encoded.split('$');
        let (Some(scheme), Some(salt), Some(expected), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        if scheme != SCHEME {
            return false;
        }
        let (Some(salt), Some(expected)) = (from_hex(salt), from_hex(expected)) else {
            return false;
        };
        match self.digest(&salt, password) {
            Ok(actual) => actual.as_slice().ct_eq(expected.as_slice()).into(),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for HmacPasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacPasswordHasher").finish_non_exhaustive()
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn from_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| s.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> HmacPasswordHasher {
        HmacPasswordHasher::new(SecretString::new("test-pepper".to_string()))
    }

    #[test]
    fn hash_then_verify() {
        let hasher = hasher();
        let encoded = hasher.hash("password123").unwrap();

        assert!(encoded.starts_with("hmac-sha256$"));
        assert!(hasher.verify("password123", &encoded));
        assert!(!hasher.verify("password124", &encoded));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let hasher = hasher();
        assert_ne!(hasher.hash("secret1").unwrap(), hasher.hash("secret1").unwrap());
    }

    #[test]
    fn different_pepper_does_not_verify() {
        let encoded = hasher().hash("password123").unwrap();
        let other = HmacPasswordHasher::new(SecretString::new("other".to_string()));
        assert!(!other.verify("password123", &encoded));
    }

    #[test]
    fn malformed_digests_never_verify() {
        let hasher = hasher();
        for bad in ["", "plain", "md5$00$00", "hmac-sha256$zz$00", "hmac-sha256$00$00$00"] {
            assert!(!hasher.verify("password123", bad), "{bad} verified");
        }
    }

    #[test]
    fn hex_helpers_round_trip() {
        let bytes = [0u8, 1, 171, 255];
        assert_eq!(to_hex(&bytes), "0001abff");
        assert_eq!(from_hex("0001abff").unwrap(), bytes);
        assert!(from_hex("abc").is_none());
    }
}
