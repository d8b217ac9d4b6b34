use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::StorageHealthStatus, ports::HealthCheckRepository},
    pet::ports::KeyValueStore,
};

/// Process-local key-value store. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

impl HealthCheckRepository for InMemoryKeyValueStore {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readiness(&self) -> Result<StorageHealthStatus, CoreError> {
        Ok(StorageHealthStatus {
            status: "healthy".to_string(),
            backend: "memory".to_string(),
            response_time_ms: 0,
            error: None,
        })
    }
}
