//! Authentication adapters.
//!
//! - `jwt` - HS256 token issuer and validator
//! - `password` - Salted HMAC-SHA256 password digests
//! - `mock` - Token table validator for tests

mod jwt;
mod mock;
mod password;

pub use jwt::JwtTokenService;
pub use mock::MockSessionValidator;
pub use password::HmacPasswordHasher;
