use axum::extract::{Path, State};
use fidofeed_core::domain::{
    breed::{entities::BreedRecord, ports::BreedService},
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBreedResponse {
    pub data: BreedRecord,
}

#[utoipa::path(
    get,
    path = "/{breed_id}",
    tag = "breed",
    summary = "Get breed",
    description = "Looks a breed up by id or display name.",
    params(
        ("breed_id" = String, Path, description = "Breed id or display name"),
    ),
    responses(
        (status = 200, body = GetBreedResponse),
        (status = 404, description = "Breed not found")
    )
)]
pub async fn get_breed(
    Path(breed_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetBreedResponse>, ApiError> {
    let breed = state.service.get_breed(&breed_id).map_err(|e| match e {
        CoreError::UnknownBreed(_) => ApiError::NotFound(e.to_string()),
        other => ApiError::from(other),
    })?;

    Ok(Response::OK(GetBreedResponse { data: breed }))
}
