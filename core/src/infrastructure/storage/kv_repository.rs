use std::time::Instant;

use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, Statement,
    sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health::{entities::StorageHealthStatus, ports::HealthCheckRepository},
        pet::ports::KeyValueStore,
    },
    entity::kv_entries::{
        ActiveModel as KvEntryActiveModel, Column as KvEntryColumn, Entity as KvEntryEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresKeyValueStore {
    pub db: DatabaseConnection,
}

impl PostgresKeyValueStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::StorageError("Database unreachable".to_string())
            })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entry = KvEntryEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to read key {}: {}", key, e);
                CoreError::StorageError(format!("Failed to read key {key}"))
            })?;

        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let active_model = KvEntryActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().naive_utc()),
        };

        KvEntryEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(KvEntryColumn::Key)
                    .update_columns([KvEntryColumn::Value, KvEntryColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to write key {}: {}", key, e);
                CoreError::StorageError(format!("Failed to write key {key}"))
            })?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        KvEntryEntity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove key {}: {}", key, e);
                CoreError::StorageError(format!("Failed to remove key {key}"))
            })?;

        Ok(())
    }
}

impl HealthCheckRepository for PostgresKeyValueStore {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }

    async fn readiness(&self) -> Result<StorageHealthStatus, CoreError> {
        Ok(match self.ping().await {
            Ok(response_time_ms) => StorageHealthStatus {
                status: "healthy".to_string(),
                backend: "postgres".to_string(),
                response_time_ms,
                error: None,
            },
            Err(e) => StorageHealthStatus {
                status: "unhealthy".to_string(),
                backend: "postgres".to_string(),
                response_time_ms: 0,
                error: Some(e.to_string()),
            },
        })
    }
}
