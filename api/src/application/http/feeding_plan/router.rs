use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    __path_build_feeding_plan, __path_generate_feeding_plan, build_feeding_plan,
    generate_feeding_plan,
};
use crate::application::{
    device_middleware::device_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(build_feeding_plan, generate_feeding_plan))]
pub struct FeedingPlanApiDoc;

pub fn feeding_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/feeding-plans"), post(build_feeding_plan))
        .route(
            &format!("{root_path}/feeding-plans/generate"),
            post(generate_feeding_plan),
        )
        .layer(middleware::from_fn(device_middleware))
}
