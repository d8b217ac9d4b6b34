use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::{entities::PetProfile, ports::PetService};
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
pub struct PetResponse {
    pub data: PetProfile,
}

#[utoipa::path(
    get,
    path = "/{pet_id}",
    tag = "pet",
    summary = "Get pet",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 200, body = PetResponse),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<PetResponse>, ApiError> {
    let pet = state
        .service
        .get_pet(&device_context.device_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PetResponse { data: pet }))
}
