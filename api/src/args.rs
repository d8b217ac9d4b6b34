use clap::{Parser, ValueEnum};
use fidofeed_core::domain::common::{
    DatabaseConfig, FidoFeedConfig, GeocodingConfig, LLMConfig, StorageConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "fidofeed", version, about = "Dog ration calculator and meal planner API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub geocoding: GeocodingArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// JSON file replacing the built-in breed table
    #[arg(long, env = "BREED_CATALOG_PATH")]
    pub breed_catalog_path: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com",
        value_parser = parse_base_url
    )]
    pub gemini_base_url: String,

    #[arg(id = "llm_timeout_seconds", long = "llm-timeout-seconds", env = "LLM_TIMEOUT_SECONDS", default_value_t = 30)]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GeocodingArgs {
    #[arg(
        long = "nominatim-base-url",
        env = "NOMINATIM_BASE_URL",
        default_value = "https://nominatim.openstreetmap.org",
        value_parser = parse_base_url
    )]
    pub nominatim_base_url: String,

    #[arg(
        long = "geocoding-user-agent",
        env = "GEOCODING_USER_AGENT",
        default_value = "fidofeed/0.1"
    )]
    pub user_agent: String,

    #[arg(
        id = "geocoding_timeout_seconds",
        long = "geocoding-timeout-seconds",
        env = "GEOCODING_TIMEOUT_SECONDS",
        default_value_t = 10
    )]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "storage", env = "STORAGE_BACKEND", value_enum, default_value = "memory")]
    pub backend: StorageBackend,

    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "fidofeed")]
    pub database_user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "fidofeed")]
    pub database_password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "fidofeed")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn parse_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL \"{value}\": {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported URL scheme \"{}\"", url.scheme()));
    }
    Ok(value.trim_end_matches('/').to_string())
}

impl From<Args> for FidoFeedConfig {
    fn from(args: Args) -> Self {
        let storage = match args.storage.backend {
            StorageBackend::Memory => StorageConfig::Memory,
            StorageBackend::Postgres => StorageConfig::Postgres(DatabaseConfig {
                host: args.storage.database_host,
                port: args.storage.database_port,
                username: args.storage.database_user,
                password: args.storage.database_password,
                name: args.storage.database_name,
            }),
        };

        FidoFeedConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout_seconds: args.llm.timeout_seconds,
            },
            geocoding: GeocodingConfig {
                nominatim_base_url: args.geocoding.nominatim_base_url,
                user_agent: args.geocoding.user_agent,
                timeout_seconds: args.geocoding.timeout_seconds,
            },
            storage,
            breed_catalog_path: args.breed_catalog_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["fidofeed"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.storage.backend, StorageBackend::Memory);

        let config = FidoFeedConfig::from(args);
        assert!(matches!(config.storage, StorageConfig::Memory));
        assert_eq!(config.geocoding.nominatim_base_url, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_postgres_storage() {
        let args = Args::parse_from([
            "fidofeed",
            "--storage",
            "postgres",
            "--database-host",
            "db",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        match FidoFeedConfig::from(args).storage {
            StorageConfig::Postgres(db) => {
                assert_eq!(db.url(), "postgres://fidofeed:fidofeed@db:5432/fidofeed")
            }
            StorageConfig::Memory => panic!("expected postgres storage"),
        }
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = Args::try_parse_from(["fidofeed", "--gemini-base-url", "ftp://x"]);
        assert!(result.is_err());
    }
}
