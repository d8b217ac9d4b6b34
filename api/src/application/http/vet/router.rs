use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{__path_find_vets, find_vets};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(find_vets))]
pub struct VetApiDoc;

pub fn vet_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/vets", state.args.server.root_path),
        get(find_vets),
    )
}
