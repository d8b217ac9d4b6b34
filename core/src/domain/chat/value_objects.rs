use crate::domain::chat::entities::ChatTurn;

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub question: String,
    pub history: Vec<ChatTurn>,
}
