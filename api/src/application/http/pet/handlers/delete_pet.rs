use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::ports::PetService;
use uuid::Uuid;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{pet_id}",
    tag = "pet",
    summary = "Delete pet",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn delete_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_pet(&device_context.device_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
