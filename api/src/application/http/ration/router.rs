use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{__path_calculate_ration, calculate_ration};
use crate::application::{
    device_middleware::device_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(calculate_ration))]
pub struct RationApiDoc;

pub fn ration_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/rations", state.args.server.root_path),
            post(calculate_ration),
        )
        .layer(middleware::from_fn(device_middleware))
}
