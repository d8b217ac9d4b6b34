use axum::{Extension, extract::State};
use fidofeed_core::domain::{
    pet::value_objects::PetReference,
    ration::{entities::RationResult, ports::RationService, value_objects::CalculateRationInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        ration::validators::CalculateRationValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CalculateRationResponse {
    pub data: RationResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ration",
    summary = "Calculate daily ration",
    description = "Computes the daily food amount in grams from breed, age and, optionally, a measured weight.",
    responses(
        (status = 200, body = CalculateRationResponse),
        (status = 400, description = "Unknown breed or invalid age"),
        (status = 404, description = "Pet not found")
    ),
    request_body = CalculateRationValidator
)]
pub async fn calculate_ration(
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<CalculateRationValidator>,
) -> Result<Response<CalculateRationResponse>, ApiError> {
    let ration = state
        .service
        .calculate_ration(CalculateRationInput {
            breed: payload.breed,
            age_in_months: payload.age_in_months,
            weight_kg: payload.weight_kg,
            pet: payload.pet_id.map(|pet_id| PetReference {
                owner: device_context.device_id,
                pet_id,
            }),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CalculateRationResponse { data: ration }))
}
