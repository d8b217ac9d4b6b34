use axum::extract::State;
use fidofeed_core::domain::breed::{entities::BreedRecord, ports::BreedService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBreedsResponse {
    pub data: Vec<BreedRecord>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "breed",
    summary = "List breeds",
    description = "Returns the breed reference table ordered by breed id.",
    responses(
        (status = 200, body = GetBreedsResponse)
    )
)]
pub async fn get_breeds(State(state): State<AppState>) -> Result<Response<GetBreedsResponse>, ApiError> {
    Ok(Response::OK(GetBreedsResponse {
        data: state.service.list_breeds(),
    }))
}
