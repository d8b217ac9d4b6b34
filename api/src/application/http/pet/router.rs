use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    __path_create_pet, __path_create_pet_feeding_plan, __path_delete_pet, __path_delete_pets,
    __path_get_pet, __path_get_pets, __path_get_weight_history, __path_record_weight,
    __path_update_pet, create_pet, create_pet_feeding_plan, delete_pet, delete_pets, get_pet,
    get_pets, get_weight_history, record_weight, update_pet,
};
use crate::application::{
    device_middleware::device_middleware, http::server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    get_pets,
    create_pet,
    delete_pets,
    get_pet,
    update_pet,
    delete_pet,
    get_weight_history,
    record_weight,
    create_pet_feeding_plan
))]
pub struct PetApiDoc;

pub fn pet_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/pets"),
            get(get_pets).post(create_pet).delete(delete_pets),
        )
        .route(
            &format!("{root_path}/pets/{{pet_id}}"),
            get(get_pet).put(update_pet).delete(delete_pet),
        )
        .route(
            &format!("{root_path}/pets/{{pet_id}}/weights"),
            get(get_weight_history).post(record_weight),
        )
        .route(
            &format!("{root_path}/pets/{{pet_id}}/feeding-plan"),
            post(create_pet_feeding_plan),
        )
        .layer(middleware::from_fn(device_middleware))
}
