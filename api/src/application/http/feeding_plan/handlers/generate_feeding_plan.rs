use axum::{Extension, extract::State};
use fidofeed_core::domain::{
    feeding_plan::{
        ports::FeedingPlanService,
        value_objects::{GenerateFeedingPlanInput, GeneratedFeedingPlan},
    },
    pet::value_objects::PetReference,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        feeding_plan::validators::GenerateFeedingPlanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

const FEEDING_PLAN_UNAVAILABLE: &str =
    "We couldn't generate the feeding plan right now. Please try again in a moment.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateFeedingPlanResponse {
    pub data: GeneratedFeedingPlan,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "feeding-plan",
    summary = "Generate a feeding plan with AI",
    description = "Asks the language model for a meal plan. Portions are corrected so they always add up to the daily amount.",
    responses(
        (status = 200, body = GenerateFeedingPlanResponse),
        (status = 400, description = "Invalid input"),
        (status = 503, description = "Language model unavailable")
    ),
    request_body = GenerateFeedingPlanValidator
)]
pub async fn generate_feeding_plan(
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<GenerateFeedingPlanValidator>,
) -> Result<Response<GenerateFeedingPlanResponse>, ApiError> {
    let generated = state
        .service
        .generate_feeding_plan(GenerateFeedingPlanInput {
            dog_name: payload.dog_name,
            breed: payload.breed,
            age_in_months: payload.age_in_months,
            weight_kg: payload.weight_kg,
            daily_grams: payload.daily_grams,
            pet: payload.pet_id.map(|pet_id| PetReference {
                owner: device_context.device_id,
                pet_id,
            }),
        })
        .await
        .map_err(|e| ApiError::from_core(e, FEEDING_PLAN_UNAVAILABLE))?;

    Ok(Response::OK(GenerateFeedingPlanResponse { data: generated }))
}
