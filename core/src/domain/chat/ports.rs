use std::future::Future;

use crate::domain::{
    chat::{
        entities::{ChatAnswer, QuickAnswer},
        value_objects::ChatInput,
    },
    common::entities::app_errors::CoreError,
};

pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatAnswer, CoreError>> + Send;

    /// Keyword lookup in the built-in knowledge base, no model involved.
    fn quick_answer(&self, question: &str) -> Result<QuickAnswer, CoreError>;
}
