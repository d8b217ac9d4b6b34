use axum::{
    Extension,
    extract::{Path, State},
};
use fidofeed_core::domain::pet::{ports::PetService, value_objects::PetFeedingPlan};
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
pub struct PetFeedingPlanResponse {
    pub data: PetFeedingPlan,
}

#[utoipa::path(
    post,
    path = "/{pet_id}/feeding-plan",
    tag = "pet",
    summary = "Build the pet's feeding plan",
    description = "Calculates the ration from the pet's breed, age and latest weight, splits it into meals and stores the plan on the pet.",
    params(
        ("pet_id" = Uuid, Path, description = "Pet ID"),
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 200, body = PetFeedingPlanResponse),
        (status = 400, description = "Pet has no breed or age"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn create_pet_feeding_plan(
    Path(pet_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<PetFeedingPlanResponse>, ApiError> {
    let result = state
        .service
        .build_pet_feeding_plan(&device_context.device_id, pet_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PetFeedingPlanResponse { data: result }))
}
