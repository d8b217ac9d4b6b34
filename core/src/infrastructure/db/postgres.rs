use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

const MAX_CONNECTIONS: u32 = 10;

/// Connects to Postgres, applies pending migrations and hands the pool to sea-orm.
pub async fn get_postgres_connection_pool(
    config: &DatabaseConfig,
) -> Result<DatabaseConnection, CoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.url())
        .await
        .map_err(|e| {
            error!("Failed to connect to database {}:{}: {}", config.host, config.port, e);
            CoreError::StorageError("Failed to connect to database".to_string())
        })?;

    sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        CoreError::StorageError("Failed to run migrations".to_string())
    })?;

    info!("Connected to database {} on {}:{}", config.name, config.host, config.port);
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}
