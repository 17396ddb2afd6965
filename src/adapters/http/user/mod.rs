//! User HTTP adapter - profile, address book and settings.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UserHandlers;
pub use routes::user_routes;
