use axum::{Extension, extract::State};
use fidofeed_core::domain::pet::ports::PetService;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "",
    tag = "pet",
    summary = "Delete all pets",
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device owning the pets"),
    ),
    responses(
        (status = 204, description = "All pets deleted")
    )
)]
pub async fn delete_pets(
    State(state): State<AppState>,
    Extension(device_context): Extension<DeviceContext>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_all_pets(&device_context.device_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
