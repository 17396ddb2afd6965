//! Voice HTTP adapter - the interpret and execute boundary.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ExecuteRequest, InterpretRequest, InterpretResponse};
pub use handlers::VoiceHandlers;
pub use routes::voice_routes;
