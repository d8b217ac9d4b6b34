use axum::extract::{Query, State};
use fidofeed_core::domain::vet::{
    entities::VetClinic,
    ports::VetService,
    value_objects::VetSearchInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    vet::validators::FindVetsParams,
};

const VETS_UNAVAILABLE: &str =
    "We couldn't search for veterinary clinics right now. Please try again in a moment.";
const NO_CLINICS_FOUND: &str = "No veterinary clinics were found for this location.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FindVetsResponse {
    pub data: Vec<VetClinic>,
    /// Present when the search found nothing.
    pub message: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "vet",
    summary = "Find veterinary clinics",
    description = "Searches clinics by city or by coordinates. Coordinate searches are sorted nearest first.",
    params(FindVetsParams),
    responses(
        (status = 200, body = FindVetsResponse),
        (status = 400, description = "Missing or invalid location"),
        (status = 503, description = "Search provider unavailable")
    )
)]
pub async fn find_vets(
    State(state): State<AppState>,
    Query(params): Query<FindVetsParams>,
) -> Result<Response<FindVetsResponse>, ApiError> {
    params.validate()?;

    let clinics = state
        .service
        .find_vets(VetSearchInput {
            query: params.query()?,
            strategy: params.strategy.unwrap_or_default(),
        })
        .await
        .map_err(|e| ApiError::from_core(e, VETS_UNAVAILABLE))?;

    let message = clinics.is_empty().then(|| NO_CLINICS_FOUND.to_string());

    Ok(Response::OK(FindVetsResponse {
        data: clinics,
        message,
    }))
}
