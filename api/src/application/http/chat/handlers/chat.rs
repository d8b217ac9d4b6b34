use axum::extract::State;
use fidofeed_core::domain::chat::{
    entities::ChatAnswer, ports::ChatService, value_objects::ChatInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

const CHAT_UNAVAILABLE: &str =
    "The assistant can't answer right now. Please try again in a moment.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub data: ChatAnswer,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the nutrition assistant",
    description = "Answers a dog nutrition question using the conversation history.",
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Empty question"),
        (status = 503, description = "Language model unavailable")
    ),
    request_body = ChatValidator
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let answer = state
        .service
        .chat(ChatInput {
            question: payload.question,
            history: payload.history,
        })
        .await
        .map_err(|e| ApiError::from_core(e, CHAT_UNAVAILABLE))?;

    Ok(Response::OK(ChatResponse { data: answer }))
}
