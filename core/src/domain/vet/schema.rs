use serde_json::json;

/// Returns the JSON schema for vet search LLM responses
pub fn get_vet_search_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "vets": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "address": { "type": "string" },
                        "phone": { "type": "string" }
                    },
                    "required": ["name", "address"]
                }
            }
        },
        "required": ["vets"]
    })
}
