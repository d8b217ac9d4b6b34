use serde_json::json;

/// Returns the JSON schema for chat LLM responses
pub fn get_chat_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "answer": { "type": "string" }
        },
        "required": ["answer"]
    })
}
