use fidofeed_core::domain::chat::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 2000, message = "question must have 1 to 2000 characters"))]
    pub question: String,

    /// Earlier exchanges, oldest first.
    #[serde(default)]
    #[validate(length(max = 50, message = "history is limited to 50 turns"))]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuickAnswerValidator {
    #[validate(length(min = 1, max = 2000, message = "question must have 1 to 2000 characters"))]
    pub question: String,
}
