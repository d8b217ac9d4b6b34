use axum::{Extension, extract::State};
use fidofeed_core::domain::pet::{ports::PetService, value_objects::CreatePetInput};

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pet::{handlers::PetResponse, validators::CreatePetValidator},
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
    path = "",
    tag = "pet",
    summary = "Create pet",
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 201, body = PetResponse),
        (status = 400, description = "Invalid name, breed or age")
    ),
    request_body = CreatePetValidator
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<CreatePetValidator>,
) -> Result<Response<PetResponse>, ApiError> {
    let pet = state
        .service
        .create_pet(
            &device_context.device_id,
            CreatePetInput {
                name: payload.name,
                breed: payload.breed,
                age_in_months: payload.age_in_months,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(PetResponse { data: pet }))
}
