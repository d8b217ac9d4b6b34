use axum::extract::State;
use fidofeed_core::domain::health::{entities::StorageHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, SERVICE_UNAVAILABLE_MESSAGE},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Reports whether the storage backend answers.",
    responses(
        (status = 200, body = StorageHealthStatus),
        (status = 503, description = "Storage is not ready")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<StorageHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if status.error.is_some() {
        tracing::warn!("Storage not ready: {:?}", status.error);
        return Err(ApiError::ServiceUnavailable(
            SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        ));
    }

    Ok(Response::OK(status))
}
