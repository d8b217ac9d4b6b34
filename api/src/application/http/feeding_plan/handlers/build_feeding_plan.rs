use axum::extract::State;
use fidofeed_core::domain::feeding_plan::{entities::FeedingPlan, ports::FeedingPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    feeding_plan::validators::BuildFeedingPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BuildFeedingPlanResponse {
    pub data: FeedingPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "feeding-plan",
    summary = "Split a daily ration into meals",
    description = "Splits the daily amount into scheduled meals whose portions add up exactly to the total, with recommendations for the dog's age.",
    responses(
        (status = 200, body = BuildFeedingPlanResponse),
        (status = 400, description = "Invalid age or daily amount")
    ),
    request_body = BuildFeedingPlanValidator
)]
pub async fn build_feeding_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BuildFeedingPlanValidator>,
) -> Result<Response<BuildFeedingPlanResponse>, ApiError> {
    let plan = state
        .service
        .plan_meals(payload.age_in_months, payload.daily_grams)
        .map_err(ApiError::from)?;

    Ok(Response::OK(BuildFeedingPlanResponse { data: plan }))
}
