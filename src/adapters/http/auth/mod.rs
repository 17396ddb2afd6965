//! Authentication HTTP adapter - login, refresh and registration.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AccountResponse, RefreshResponse, TokenResponse};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
