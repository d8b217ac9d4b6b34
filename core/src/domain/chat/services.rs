use tracing::{error, instrument};

use crate::domain::{
    chat::{
        entities::{ChatAnswer, QuickAnswer},
        knowledge_base::KnowledgeBase,
        ports::ChatService,
        prompts::render_chat_prompt,
        schema::get_chat_schema,
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    pet::ports::KeyValueStore,
    vet::ports::PlacesClient,
};

fn validate_question(question: &str) -> Result<&str, CoreError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(CoreError::InvalidInput("Question must not be empty".to_string()));
    }
    Ok(question)
}

impl<KV, LLM, PL, HC> ChatService for Service<KV, LLM, PL, HC>
where
    KV: KeyValueStore,
    LLM: LLMClient,
    PL: PlacesClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(history_len = input.history.len()))]
    async fn chat(&self, input: ChatInput) -> Result<ChatAnswer, CoreError> {
        let question = validate_question(&input.question)?;
        let prompt = render_chat_prompt(question, &input.history);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_chat_schema())
            .await?;

        let answer: ChatAnswer = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Invalid chat response format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid chat response format: {}", e))
        })?;

        if answer.answer.trim().is_empty() {
            error!("Chat response contained an empty answer");
            return Err(CoreError::ExternalServiceError(
                "Empty chat answer".to_string(),
            ));
        }

        Ok(answer)
    }

    fn quick_answer(&self, question: &str) -> Result<QuickAnswer, CoreError> {
        let question = validate_question(question)?;
        Ok(KnowledgeBase.answer(question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::{ChatTurn, KnowledgeTopic},
        common::testing::{llm_answering, llm_failing, llm_unused, test_service},
        llm::ports::MockLLMClient,
    };

    #[tokio::test]
    async fn test_chat_sends_question_and_history() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("**New user question:**\nHow often should my adult dog eat?")
                    && prompt.contains("User: Hi\nFidoFeed AI: Hello!")
                    && *schema == get_chat_schema()
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"answer": "Twice a day. Consult a veterinarian."}"#.to_string())
                })
            });
        let service = test_service(llm);

        let answer = service
            .chat(ChatInput {
                question: "  How often should my adult dog eat?  ".to_string(),
                history: vec![ChatTurn {
                    user: "Hi".to_string(),
                    bot: "Hello!".to_string(),
                }],
            })
            .await
            .unwrap();

        assert_eq!(answer.answer, "Twice a day. Consult a veterinarian.");
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_question() {
        let service = test_service(llm_unused());
        let result = service
            .chat(ChatInput {
                question: "   ".to_string(),
                history: vec![],
            })
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_chat_malformed_or_empty_response() {
        for response in ["not json", r#"{"answer": "  "}"#] {
            let service = test_service(llm_answering(response));
            let result = service
                .chat(ChatInput {
                    question: "Hello".to_string(),
                    history: vec![],
                })
                .await;
            assert!(
                matches!(result, Err(CoreError::ExternalServiceError(_))),
                "response: {response}"
            );
        }
    }

    #[tokio::test]
    async fn test_chat_model_failure() {
        let service = test_service(llm_failing());
        let result = service
            .chat(ChatInput {
                question: "Hello".to_string(),
                history: vec![],
            })
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[test]
    fn test_quick_answer_stays_offline() {
        let service = test_service(llm_unused());
        let answer = service.quick_answer("Is chocolate toxic?").unwrap();
        assert_eq!(answer.topic, KnowledgeTopic::Faq);
    }
}
