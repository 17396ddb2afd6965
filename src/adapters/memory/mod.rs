//! In-memory repositories.
//!
//! State lives for the life of the process. Each store is injected through
//! its port, so a persistent adapter can replace it without touching handlers.

mod contacts;
mod settings;
mod users;

pub use contacts::InMemoryContactRepository;
pub use settings::InMemorySettingsRepository;
pub use users::{DemoUser, InMemoryUserRepository, DEMO_USERS};
