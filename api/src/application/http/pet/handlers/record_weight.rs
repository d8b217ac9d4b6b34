use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::{ports::PetService, value_objects::RecordWeightInput};
use uuid::Uuid;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pet::{handlers::PetResponse, validators::RecordWeightValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/{pet_id}/weights",
    tag = "pet",
    summary = "Record weight",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 201, body = PetResponse),
        (status = 400, description = "Invalid weight"),
        (status = 404, description = "Pet not found")
    ),
    request_body = RecordWeightValidator
)]
pub async fn record_weight(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<RecordWeightValidator>,
) -> Result<Response<PetResponse>, ApiError> {
    let pet = state
        .service
        .record_weight(
            &device_context.device_id,
            pet_id,
            RecordWeightInput {
                weight_kg: payload.weight_kg,
                recorded_at: payload.recorded_at,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(PetResponse { data: pet }))
}
