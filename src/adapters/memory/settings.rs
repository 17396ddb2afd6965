//! In-memory user settings.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{default_settings, merge_settings};
use crate::ports::SettingsRepository;

/// Settings keyed by user id; absent users read the defaults.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    settings: RwLock<HashMap<UserId, Map<String, Value>>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self, user: UserId) -> Result<Map<String, Value>, DomainError> {
        let settings = self.settings.read().await;
        Ok(settings.get(&user).cloned().unwrap_or_else(default_settings))
    }

    async fn merge(
        &self,
        user: UserId,
        update: Map<String, Value>,
    ) -> Result<Map<String, Value>, DomainError> {
        let mut settings = self.settings.write().await;
        let current = settings.entry(user).or_insert_with(default_settings);
        merge_settings(current, update);
        Ok(current.clone())
    }
}
