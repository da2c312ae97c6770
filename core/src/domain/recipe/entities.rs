use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "EASY")]
    Easy,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "hard", alias = "HARD")]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Free text lines with the quantity embedded, e.g. "2 cups rice".
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Checks the fields a provider reply is most likely to get wrong.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("recipe title is empty".to_string());
        }
        if self.ingredients.is_empty() {
            return Err(format!("recipe '{}' has no ingredients", self.title));
        }
        if self.instructions.is_empty() {
            return Err(format!("recipe '{}' has no instructions", self.title));
        }
        if self.cooking_time == 0 {
            return Err(format!("recipe '{}' has a zero cooking time", self.title));
        }
        if self.servings == 0 {
            return Err(format!("recipe '{}' has zero servings", self.title));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientIdentification {
    pub ingredients: Vec<String>,
    /// Always within `[0, 1]`.
    pub confidence: f64,
}

impl IngredientIdentification {
    pub fn new(ingredients: Vec<String>, confidence: f64) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            ingredients,
            confidence,
        }
    }

    /// Returned whenever the vision provider cannot be used.
    pub fn fallback() -> Self {
        Self {
            ingredients: vec!["mixed vegetables".to_string()],
            confidence: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestions {
    pub recipes: Vec<Recipe>,
    pub identified_ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: "tomato-soup".to_string(),
            title: "Tomato Soup".to_string(),
            summary: "Smooth soup".to_string(),
            ingredients: vec!["4 tomatoes".to_string()],
            instructions: vec!["Simmer".to_string()],
            cooking_time: 30,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: vec![],
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["cookingTime"], json!(30));
        assert_eq!(value["difficulty"], json!("Easy"));
        assert_eq!(value["tags"], json!([]));
    }

    #[test]
    fn test_recipe_accepts_missing_tags_and_lowercase_difficulty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "x",
            "title": "Omelette",
            "summary": "Eggs",
            "ingredients": ["2 eggs"],
            "instructions": ["Whisk", "Cook"],
            "cookingTime": 10,
            "servings": 1,
            "difficulty": "medium"
        }))
        .unwrap();

        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert!(recipe.tags.is_empty());
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_identification_clamps_confidence() {
        assert_eq!(IngredientIdentification::new(vec![], 1.7).confidence, 1.0);
        assert_eq!(IngredientIdentification::new(vec![], -0.2).confidence, 0.0);
        assert_eq!(IngredientIdentification::new(vec![], f64::NAN).confidence, 0.0);
    }

    #[test]
    fn test_suggestions_envelope_field_names() {
        let suggestions = RecipeSuggestions {
            recipes: vec![],
            identified_ingredients: vec!["leek".to_string()],
        };
        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(value, json!({"recipes": [], "identifiedIngredients": ["leek"]}));
    }
}
