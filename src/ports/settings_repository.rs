//! SettingsRepository port for per-user preferences.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, UserId};

/// Repository for user settings.
///
/// A user with no stored settings sees the defaults.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, user: UserId) -> Result<Map<String, Value>, DomainError>;

    /// Shallow-merges `update` into the stored settings and returns the result.
    async fn merge(
        &self,
        user: UserId,
        update: Map<String, Value>,
    ) -> Result<Map<String, Value>, DomainError>;
}
