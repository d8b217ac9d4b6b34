use serde_json::json;

/// Returns the JSON schema for feeding plan LLM responses
pub fn get_feeding_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "plan": {
                "type": "object",
                "properties": {
                    "meals": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "meal_name": { "type": "string" },
                                "time": { "type": "string" },
                                "portion_grams": { "type": "number" }
                            },
                            "required": ["meal_name", "time", "portion_grams"]
                        }
                    },
                    "recommendations": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["meals", "recommendations"]
            }
        },
        "required": ["plan"]
    })
}
