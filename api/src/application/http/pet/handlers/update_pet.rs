use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::{ports::PetService, value_objects::UpdatePetInput};
use uuid::Uuid;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pet::{handlers::PetResponse, validators::UpdatePetValidator},
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
    put,
    path = "/{pet_id}",
    tag = "pet",
    summary = "Update pet",
    description = "Changes the fields present in the body and keeps the others.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 200, body = PetResponse),
        (status = 400, description = "Invalid name, breed or age"),
        (status = 404, description = "Pet not found")
    ),
    request_body = UpdatePetValidator
)]
pub async fn update_pet(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<UpdatePetValidator>,
) -> Result<Response<PetResponse>, ApiError> {
    let pet = state
        .service
        .update_pet(
            &device_context.device_id,
            pet_id,
            UpdatePetInput {
                name: payload.name,
                breed: payload.breed,
                age_in_months: payload.age_in_months,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PetResponse { data: pet }))
}
