use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;
#[cfg(test)]
pub mod testing;

#[derive(Clone, Debug)]
pub struct FidoFeedConfig {
    pub llm: LLMConfig,
    pub geocoding: GeocodingConfig,
    pub storage: StorageConfig,
    pub breed_catalog_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Clone, Debug)]
pub struct GeocodingConfig {
    pub nominatim_base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

#[derive(Clone, Debug)]
pub enum StorageConfig {
    Memory,
    Postgres(DatabaseConfig),
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
