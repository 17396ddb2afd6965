//! Tools HTTP adapter - read-only catalog and dry-run validation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ToolsHandlers;
pub use routes::tools_routes;
