use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{__path_chat, __path_quick_answer, chat, quick_answer};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(chat, quick_answer))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/chat"), post(chat))
        .route(&format!("{root_path}/chat/quick"), post(quick_answer))
}
