use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Generative model that answers a prompt with JSON matching `response_schema`.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
