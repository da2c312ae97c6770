use std::future::Future;

use crate::domain::{
    common::entities::{app_errors::CoreError, outcome::Outcome},
    recipe::{
        entities::{IngredientIdentification, RecipeSuggestions},
        value_objects::{GenerateRecipesFromImageInput, GenerateRecipesInput, IdentifyIngredientsInput},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a prompt with one inline JPEG image and returns the reply text.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Sends a text-only prompt and returns the reply text. A response
    /// schema asks the model for JSON output.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient identification and recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn identify_ingredients(
        &self,
        input: IdentifyIngredientsInput,
    ) -> impl Future<Output = Result<Outcome<IngredientIdentification>, CoreError>> + Send;

    /// Generates recipes from a known ingredient list. Used for the first
    /// generation and for regeneration with an exclusion list.
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Outcome<RecipeSuggestions>, CoreError>> + Send;

    /// Identifies the ingredients in an image, then generates recipes from
    /// them.
    fn generate_recipes_from_image(
        &self,
        input: GenerateRecipesFromImageInput,
    ) -> impl Future<Output = Result<Outcome<RecipeSuggestions>, CoreError>> + Send;
}
