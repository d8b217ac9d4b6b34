use axum::{Extension, extract::State};
use fidofeed_core::domain::pet::{entities::PetProfile, ports::PetService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPetsResponse {
    pub data: Vec<PetProfile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pet",
    summary = "List pets",
    description = "Lists the pets stored for the calling device.",
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 200, body = GetPetsResponse)
    )
)]
pub async fn get_pets(
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<GetPetsResponse>, ApiError> {
    let pets = state
        .service
        .list_pets(&device_context.device_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPetsResponse { data: pets }))
}
