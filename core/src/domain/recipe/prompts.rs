use crate::domain::recipe::{RECIPE_COUNT, value_objects::ExclusionList};

pub const INGREDIENT_IDENTIFICATION_PROMPT: &str = r#"Analyze this image and identify all visible food ingredients.
Return a JSON object with the following structure:
{
    "ingredients": ["ingredient1", "ingredient2", ...],
    "confidence": 0.95
}

Focus only on ingredients that can be used for cooking. Be specific but concise.
If you can't clearly identify ingredients, set confidence lower."#;

const RECIPE_JSON_SHAPE: &str = r#"[
    {
        "id": "unique_recipe_id_1",
        "title": "Recipe Name",
        "summary": "Brief description of the dish",
        "ingredients": ["ingredient with quantity", "another ingredient"],
        "instructions": ["Step 1", "Step 2", "Step 3"],
        "cookingTime": 30,
        "servings": 4,
        "difficulty": "Easy",
        "tags": ["tag1", "tag2"]
    }
]"#;

pub fn build_recipe_generation_prompt(ingredients: &[String], exclusions: &ExclusionList) -> String {
    let mut prompt = format!(
        "Generate exactly {count} unique recipes using these ingredients: {ingredients}\n\n\
         Requirements:\n\
         - Each recipe must feature 2-3 of the provided ingredients as its main ingredients\n\
         - Provide complete recipes with all required fields\n\
         - Make recipes practical and achievable\n\
         - Vary difficulty levels: 2 Easy, 2 Medium and 1 Hard\n\
         - Include diverse cuisine types\n",
        count = RECIPE_COUNT,
        ingredients = ingredients.join(", "),
    );

    if !exclusions.is_empty() {
        prompt.push_str("\nThe user has already seen these recipes. Do not suggest any of them again:\n");
        for name in exclusions.display_names() {
            prompt.push_str(&format!("- {}\n", name));
        }
        prompt.push_str("Also avoid near-duplicates of them, such as the same dish under a different name.\n");
    }

    prompt.push_str(&format!(
        "\nReturn a JSON array with this exact structure:\n{}\n\n\
         Ensure ingredients include quantities and instructions are clear step-by-step directions.",
        RECIPE_JSON_SHAPE
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_ingredients_and_requirements() {
        let prompt = build_recipe_generation_prompt(
            &["eggs".to_string(), "spinach".to_string()],
            &ExclusionList::default(),
        );

        assert!(prompt.starts_with("Generate exactly 5 unique recipes using these ingredients: eggs, spinach"));
        assert!(prompt.contains("2 Easy, 2 Medium and 1 Hard"));
        assert!(prompt.contains("\"cookingTime\": 30"));
        assert!(!prompt.contains("already seen"));
    }

    #[test]
    fn test_prompt_includes_exclusion_block() {
        let prompt = build_recipe_generation_prompt(
            &["eggs".to_string()],
            &ExclusionList::new(["Spinach Frittata", "egg-fried-rice"]),
        );

        assert!(prompt.contains("- Spinach Frittata\n"));
        assert!(prompt.contains("- egg fried rice\n"));
        assert!(prompt.contains("near-duplicates"));
    }
}
