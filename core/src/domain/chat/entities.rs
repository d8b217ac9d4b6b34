use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One exchange of an ongoing conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatAnswer {
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeTopic {
    Breed,
    Faq,
    Size,
    Fallback,
}

/// Offline answer from the built-in knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuickAnswer {
    pub answer: String,
    pub topic: KnowledgeTopic,
}
