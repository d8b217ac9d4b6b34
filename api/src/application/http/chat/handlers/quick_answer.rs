use axum::extract::State;
use fidofeed_core::domain::chat::{entities::QuickAnswer, ports::ChatService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::QuickAnswerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QuickAnswerResponse {
    pub data: QuickAnswer,
}

#[utoipa::path(
    post,
    path = "/quick",
    tag = "chat",
    summary = "Offline answer",
    description = "Answers from the built-in knowledge base without calling the language model.",
    responses(
        (status = 200, body = QuickAnswerResponse),
        (status = 400, description = "Empty question")
    ),
    request_body = QuickAnswerValidator
)]
pub async fn quick_answer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<QuickAnswerValidator>,
) -> Result<Response<QuickAnswerResponse>, ApiError> {
    let answer = state
        .service
        .quick_answer(&payload.question)
        .map_err(ApiError::from)?;

    Ok(Response::OK(QuickAnswerResponse { data: answer }))
}
