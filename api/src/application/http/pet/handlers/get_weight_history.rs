use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::{entities::WeightEntry, ports::PetService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WeightHistoryResponse {
    /// Oldest entry first.
    pub data: Vec<WeightEntry>,
}

#[utoipa::path(
    get,
    path = "/{pet_id}/weights",
    tag = "pet",
    summary = "Weight history",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 200, body = WeightHistoryResponse),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_weight_history(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<WeightHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_weight_history(&device_context.device_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WeightHistoryResponse { data: history }))
}
