//! HS256 JWT adapter.
//!
//! Issues and validates access tokens signed with the service secret. It
//! implements both `TokenIssuer` and `SessionValidator`, so the login handler
//! and the auth middleware agree on one key and one claim layout.
//!
//! # Security
//!
//! Validation checks:
//! - **Signature**: HS256 with the configured secret
//! - **Issuer (iss)**: Must match the configured issuer
//! - **Expiry (exp)**: Must be in the future

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, Timestamp, UserId};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    /// Subject - the username
    sub: String,

    /// Numeric user id
    user_id: u64,

    /// Role name
    role: String,

    /// Issuer
    iss: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    /// Issued at timestamp
    iat: i64,
}

/// Signs and validates HS256 access tokens.
pub struct JwtTokenService {
    secret: SecretString,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: SecretString, issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret,
            issuer: issuer.into(),
            ttl,
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        let now = Timestamp::now();
        let ttl_secs = self.ttl.as_secs();
        let claims = AccessClaims {
            sub: user.username.clone(),
            user_id: user.id.value(),
            role: user.role.as_str().to_string(),
            iss: self.issuer.clone(),
            exp: now.as_unix_secs() + ttl_secs as i64,
            iat: now.as_unix_secs(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key())
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {}", e);
                AuthError::service_unavailable("token signing failed")
            })?;

        Ok(IssuedToken {
            access_token,
            expires_in: ttl_secs,
        })
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key(), &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;

        let claims = data.claims;
        let role: Role = claims.role.parse().map_err(|_| {
            tracing::warn!("Unknown role in token: {}", claims.role);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(UserId::new(claims.user_id), claims.sub, role))
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
