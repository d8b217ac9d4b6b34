use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StorageHealthStatus {
    pub status: String,
    pub backend: String,
    pub response_time_ms: u64,
    pub error: Option<String>,
}
