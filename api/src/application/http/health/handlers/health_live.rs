use axum::extract::State;
use fidofeed_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub storage_response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, description = "Storage is unreachable")
    )
)]
pub async fn health_live(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let storage_response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        storage_response_time_ms,
    }))
}
