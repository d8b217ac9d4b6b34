use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{__path_get_breed, __path_get_breeds, get_breed, get_breeds};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_breeds, get_breed))]
pub struct BreedApiDoc;

pub fn breed_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/breeds"), get(get_breeds))
        .route(&format!("{root_path}/breeds/{{breed_id}}"), get(get_breed))
}
