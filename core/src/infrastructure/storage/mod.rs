use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    health::{entities::StorageHealthStatus, ports::HealthCheckRepository},
    pet::ports::KeyValueStore,
};
use crate::infrastructure::db::postgres::get_postgres_connection_pool;

pub mod kv_repository;
pub mod memory;

use kv_repository::PostgresKeyValueStore;
use memory::InMemoryKeyValueStore;

/// Key-value backend picked from configuration at startup.
#[derive(Debug, Clone)]
pub enum KeyValueBackend {
    Memory(InMemoryKeyValueStore),
    Postgres(PostgresKeyValueStore),
}

impl KeyValueBackend {
    pub async fn from_config(config: &StorageConfig) -> Result<Self, CoreError> {
        match config {
            StorageConfig::Memory => Ok(Self::Memory(InMemoryKeyValueStore::new())),
            StorageConfig::Postgres(database) => {
                let db = get_postgres_connection_pool(database).await?;
                Ok(Self::Postgres(PostgresKeyValueStore::new(db)))
            }
        }
    }
}

impl KeyValueStore for KeyValueBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::Postgres(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::Postgres(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::Postgres(store) => store.remove(key).await,
        }
    }
}

impl HealthCheckRepository for KeyValueBackend {
    async fn health(&self) -> Result<u64, CoreError> {
        match self {
            Self::Memory(store) => store.health().await,
            Self::Postgres(store) => store.health().await,
        }
    }

    async fn readiness(&self) -> Result<StorageHealthStatus, CoreError> {
        match self {
            Self::Memory(store) => store.readiness().await,
            Self::Postgres(store) => store.readiness().await,
        }
    }
}
