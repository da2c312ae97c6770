use serde_json::json;

/// Returns the JSON schema for ingredient identification replies
pub fn get_ingredient_identification_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "confidence": { "type": "number" }
        },
        "required": ["ingredients", "confidence"]
    })
}

/// Returns the JSON schema for recipe generation replies
pub fn get_recipe_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "title": { "type": "string" },
                "summary": { "type": "string" },
                "ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "cookingTime": { "type": "integer" },
                "servings": { "type": "integer" },
                "difficulty": {
                    "type": "string",
                    "enum": ["Easy", "Medium", "Hard"]
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": [
                "title", "summary", "ingredients", "instructions",
                "cookingTime", "servings", "difficulty"
            ]
        }
    })
}
