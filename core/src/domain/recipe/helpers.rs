use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{IngredientIdentification, Recipe},
};

/// Removes a leading "```json" or "```" fence and a trailing "```" fence
/// around a model reply.
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();

    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```JSON"))
        .or_else(|| trimmed.strip_prefix("```"));

    match without_open {
        Some(body) => body.trim().strip_suffix("```").unwrap_or(body).trim(),
        None => trimmed,
    }
}

/// Lowercase alphanumeric words joined by '-'. Non-latin scripts are kept.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Debug, Deserialize)]
struct IdentificationReply {
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    confidence: f64,
}

pub fn parse_identification(reply: &str) -> Result<IngredientIdentification, CoreError> {
    let parsed: IdentificationReply =
        serde_json::from_str(strip_code_fence(reply)).map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to parse ingredient reply: {}", e))
        })?;

    let ingredients = parsed
        .ingredients
        .into_iter()
        .map(|ingredient| ingredient.trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect();

    Ok(IngredientIdentification::new(ingredients, parsed.confidence))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipesReply {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

/// Parses the recipe array a model returned and gives every recipe a
/// stable id derived from its title.
pub fn parse_recipes(reply: &str) -> Result<Vec<Recipe>, CoreError> {
    let parsed: RecipesReply = serde_json::from_str(strip_code_fence(reply)).map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to parse recipe reply: {}", e))
    })?;

    let mut recipes = match parsed {
        RecipesReply::List(recipes) => recipes,
        RecipesReply::Wrapped { recipes } => recipes,
    };

    for recipe in &recipes {
        recipe
            .validate()
            .map_err(|e| CoreError::ExternalServiceError(format!("Invalid recipe: {}", e)))?;
    }

    assign_recipe_ids(&mut recipes);

    Ok(recipes)
}

pub fn assign_recipe_ids(recipes: &mut [Recipe]) {
    let mut seen = HashSet::new();

    for recipe in recipes.iter_mut() {
        let base = match slugify(&recipe.title) {
            slug if slug.is_empty() => "recipe".to_string(),
            slug => slug,
        };

        let mut id = base.clone();
        let mut suffix = 2;
        while !seen.insert(id.clone()) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        recipe.id = id;
    }
}
