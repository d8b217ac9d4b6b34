use crate::domain::chat::{
    entities::ChatTurn,
    knowledge_base::{KnowledgeBase, SAFETY_FACTS},
};

const CHAT_TEMPLATE: &str = r#"You are a dog nutrition expert called FidoFeed AI. Your goal is to answer users' questions about dog feeding in a clear, friendly and safe way.

**Important instructions:**
1.  **Safety first:** Always stress that your recommendations are only suggestions and that a veterinarian must be consulted for specific advice, especially if the dog has health problems.
2.  **Be friendly:** Use accessible language and a helpful tone.
3.  **Use the history:** Pay attention to the conversation history so your answers make sense in the context of the dialogue.
4.  **Knowledge base:** Base your answers on the knowledge base below. You may expand on these points, but never contradict the safety information (e.g. about bones).

**Conversation history:**
{history}

**New user question:**
{question}

**Knowledge base:**
{facts}

**Popular breeds:**
{breeds}

Answer the user's question based on the context provided."#;

pub fn render_chat_prompt(question: &str, history: &[ChatTurn]) -> String {
    let history = if history.is_empty() {
        "(no previous messages)".to_string()
    } else {
        history
            .iter()
            .map(|turn| format!("User: {}\nFidoFeed AI: {}", turn.user, turn.bot))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let facts = bullet_list(SAFETY_FACTS.iter().map(|f| f.to_string()));
    let breeds = bullet_list(KnowledgeBase.breed_summaries());

    CHAT_TEMPLATE
        .replace("{history}", &history)
        .replace("{facts}", &facts)
        .replace("{breeds}", &breeds)
        .replace("{question}", question)
}

fn bullet_list(lines: impl Iterator<Item = String>) -> String {
    lines.map(|l| format!("*   {l}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_history_in_order() {
        let history = vec![
            ChatTurn {
                user: "Hi".to_string(),
                bot: "Hello!".to_string(),
            },
            ChatTurn {
                user: "My dog is a beagle".to_string(),
                bot: "Nice.".to_string(),
            },
        ];

        let prompt = render_chat_prompt("How much should he eat?", &history);

        let first = prompt.find("User: Hi").unwrap();
        let second = prompt.find("User: My dog is a beagle").unwrap();
        assert!(first < second);
        assert!(prompt.contains("How much should he eat?"));
        assert!(prompt.contains("*   Bones:"));
        assert!(!prompt.contains("{history}"));
    }

    #[test]
    fn test_render_without_history() {
        let prompt = render_chat_prompt("Hello?", &[]);
        assert!(prompt.contains("(no previous messages)"));
    }
}
