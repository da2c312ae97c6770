use tracing::{instrument, warn};

use crate::domain::{
    common::{
        entities::{app_errors::CoreError, outcome::Outcome},
        services::Service,
    },
    recipe::{
        RECIPE_COUNT,
        entities::{IngredientIdentification, Recipe, RecipeSuggestions},
        fallback::fallback_recipes,
        helpers::{parse_identification, parse_recipes},
        image_preparation::prepare_image,
        ports::{LLMClient, RecipeService},
        prompts::{INGREDIENT_IDENTIFICATION_PROMPT, build_recipe_generation_prompt},
        schema::{get_ingredient_identification_schema, get_recipe_list_schema},
        value_objects::{
            ExclusionList, GenerateRecipesFromImageInput, GenerateRecipesInput,
            IdentifyIngredientsInput,
        },
    },
    speech::ports::{SpeechSynthesizer, SpeechTranscriber},
};

impl<LLM, TTS, STT> Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    async fn identify_prepared_image(&self, jpeg: Vec<u8>) -> Outcome<IngredientIdentification> {
        let reply = match self
            .llm_client
            .generate_with_image(
                INGREDIENT_IDENTIFICATION_PROMPT.to_string(),
                jpeg,
                Some(get_ingredient_identification_schema()),
            )
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Ingredient identification failed, using fallback");
                return Outcome::fallback(IngredientIdentification::fallback(), e.to_string());
            }
        };

        match parse_identification(&reply) {
            Ok(identification) => Outcome::Live(identification),
            Err(e) => {
                warn!(error = %e, "Unusable ingredient reply, using fallback");
                Outcome::fallback(IngredientIdentification::fallback(), e.to_string())
            }
        }
    }

    async fn request_recipes(
        &self,
        ingredients: &[String],
        exclusions: &ExclusionList,
    ) -> Result<Vec<Recipe>, CoreError> {
        let prompt = build_recipe_generation_prompt(ingredients, exclusions);
        let reply = self
            .llm_client
            .generate_with_text(prompt, Some(get_recipe_list_schema()))
            .await?;

        let parsed = parse_recipes(&reply)?;
        let parsed_count = parsed.len();

        let mut recipes: Vec<Recipe> = parsed
            .into_iter()
            .filter(|recipe| !exclusions.excludes(recipe))
            .collect();

        if recipes.len() < parsed_count {
            warn!(
                dropped = parsed_count - recipes.len(),
                "Provider repeated excluded recipes"
            );
        }

        if recipes.len() < RECIPE_COUNT {
            return Err(CoreError::ExternalServiceError(format!(
                "Expected {} recipes, provider returned {} usable",
                RECIPE_COUNT,
                recipes.len()
            )));
        }

        recipes.truncate(RECIPE_COUNT);
        Ok(recipes)
    }
}

fn normalize_ingredients(ingredients: Vec<String>) -> Vec<String> {
    ingredients
        .into_iter()
        .map(|ingredient| ingredient.trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

impl<LLM, TTS, STT> RecipeService for Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image_data.len()))]
    async fn identify_ingredients(
        &self,
        input: IdentifyIngredientsInput,
    ) -> Result<Outcome<IngredientIdentification>, CoreError> {
        // Rejects empty and undecodable uploads before the provider is called.
        let jpeg = prepare_image(&input.image_data)?;

        Ok(self.identify_prepared_image(jpeg).await)
    }

    #[instrument(
        skip(self, input),
        fields(ingredients = input.ingredients.len(), exclusions = input.exclusions.len())
    )]
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<Outcome<RecipeSuggestions>, CoreError> {
        let ingredients = normalize_ingredients(input.ingredients);
        if ingredients.is_empty() {
            return Err(CoreError::InvalidInput(
                "At least one ingredient is required".to_string(),
            ));
        }

        let recipes = match self.request_recipes(&ingredients, &input.exclusions).await {
            Ok(recipes) => Outcome::Live(recipes),
            Err(e) => {
                warn!(error = %e, "Recipe generation failed, using fallback recipes");
                Outcome::fallback(fallback_recipes(&ingredients), e.to_string())
            }
        };

        Ok(recipes.map(|recipes| RecipeSuggestions {
            recipes,
            identified_ingredients: ingredients,
        }))
    }

    #[instrument(
        skip(self, input),
        fields(image_bytes = input.image_data.len(), exclusions = input.exclusions.len())
    )]
    async fn generate_recipes_from_image(
        &self,
        input: GenerateRecipesFromImageInput,
    ) -> Result<Outcome<RecipeSuggestions>, CoreError> {
        let identification = self
            .identify_ingredients(IdentifyIngredientsInput {
                image_data: input.image_data,
            })
            .await?;

        let identification_reason = match &identification {
            Outcome::Fallback { reason, .. } => Some(reason.clone()),
            Outcome::Live(_) => None,
        };

        let ingredients = identification.into_inner().ingredients;
        if ingredients.is_empty() {
            return Err(CoreError::InvalidInput(
                "No ingredients could be identified in the image".to_string(),
            ));
        }

        let suggestions = self
            .generate_recipes(GenerateRecipesInput {
                ingredients,
                exclusions: input.exclusions,
            })
            .await?;

        Ok(match (suggestions, identification_reason) {
            (Outcome::Live(value), Some(reason)) => Outcome::Fallback { value, reason },
            (suggestions, _) => suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use mockall::predicate::always;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::tests::test_config,
        recipe::ports::MockLLMClient,
        speech::ports::{MockSpeechSynthesizer, MockSpeechTranscriber},
    };

    type TestService = Service<MockLLMClient, MockSpeechSynthesizer, MockSpeechTranscriber>;

    fn service(llm: MockLLMClient) -> TestService {
        Service::new(
            test_config(),
            llm,
            MockSpeechSynthesizer::new(),
            MockSpeechTranscriber::new(),
        )
    }

    fn png_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 200, 10])))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn recipes_reply(titles: &[&str]) -> String {
        let recipes: Vec<serde_json::Value> = titles
            .iter()
            .map(|title| {
                json!({
                    "id": "ignored",
                    "title": title,
                    "summary": "Tasty",
                    "ingredients": ["1 cup rice"],
                    "instructions": ["Cook it"],
                    "cookingTime": 20,
                    "servings": 2,
                    "difficulty": "Medium",
                    "tags": []
                })
            })
            .collect();
        serde_json::to_string(&recipes).unwrap()
    }

    const FIVE: [&str; 5] = ["Fried Rice", "Rice Pudding", "Risotto", "Congee", "Paella"];

    #[tokio::test]
    async fn test_identify_rejects_non_image_without_calling_provider() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().times(0);

        let err = service(llm)
            .identify_ingredients(IdentifyIngredientsInput {
                image_data: b"not an image".to_vec(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_identify_parses_fenced_reply_and_sends_jpeg() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, image, schema| {
                prompt.contains("identify all visible food ingredients")
                    && image.starts_with(&[0xFF, 0xD8])
                    && schema.is_some()
            })
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok("```json\n{\"ingredients\": [\"tomato\", \"basil\"], \"confidence\": 0.9}\n```"
                        .to_string())
                })
            });

        let outcome = service(llm)
            .identify_ingredients(IdentifyIngredientsInput {
                image_data: png_bytes(),
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Live(IngredientIdentification::new(strings(&["tomato", "basil"]), 0.9))
        );
    }

    #[tokio::test]
    async fn test_identify_falls_back_on_provider_failure() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let outcome = service(llm)
            .identify_ingredients(IdentifyIngredientsInput {
                image_data: png_bytes(),
            })
            .await
            .unwrap();

        assert!(outcome.is_fallback());
        let value = outcome.into_inner();
        assert_eq!(value.ingredients, vec!["mixed vegetables"]);
        assert_eq!(value.confidence, 0.1);
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_ingredients() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(0);

        let err = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["", "   "]),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_generate_returns_live_recipes() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(always(), always())
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(recipes_reply(&FIVE)) }));

        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["rice", "egg"]),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert!(!outcome.is_fallback());
        let suggestions = outcome.into_inner();
        assert_eq!(suggestions.recipes.len(), RECIPE_COUNT);
        assert_eq!(suggestions.recipes[2].id, "risotto");
        assert_eq!(suggestions.identified_ingredients, strings(&["rice", "egg"]));
    }

    #[tokio::test]
    async fn test_generate_truncates_extra_recipes() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Ok(recipes_reply(&["A", "B", "C", "D", "E", "F", "G"])) })
        });

        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["rice"]),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.value().recipes.len(), RECIPE_COUNT);
    }

    #[tokio::test]
    async fn test_generate_falls_back_when_provider_unreachable() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("connect refused".to_string())) })
        });

        let ingredients = strings(&["chicken", "leek", "carrot"]);
        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: ingredients.clone(),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert!(outcome.is_fallback());
        let suggestions = outcome.into_inner();
        assert_eq!(suggestions.recipes, fallback_recipes(&ingredients));
        assert_eq!(suggestions.recipes.len(), RECIPE_COUNT);
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_malformed_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok("Here are some ideas: soup!".to_string()) }));

        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["potato"]),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert!(outcome.is_fallback());
        assert_eq!(outcome.value().recipes.len(), RECIPE_COUNT);
    }

    #[tokio::test]
    async fn test_generate_drops_excluded_recipes() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("- Paella\n"))
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(recipes_reply(&["Paella", "Fried Rice", "Rice Pudding", "Risotto", "Congee", "Jambalaya"]))
                })
            });

        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["rice"]),
                exclusions: ExclusionList::new(["Paella"]),
            })
            .await
            .unwrap();

        assert!(!outcome.is_fallback());
        let recipes = outcome.into_inner().recipes;
        assert_eq!(recipes.len(), RECIPE_COUNT);
        assert!(recipes.iter().all(|recipe| recipe.id != "paella"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_when_exclusions_leave_too_few() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(recipes_reply(&FIVE)) }));

        let outcome = service(llm)
            .generate_recipes(GenerateRecipesInput {
                ingredients: strings(&["rice"]),
                exclusions: ExclusionList::new(["congee"]),
            })
            .await
            .unwrap();

        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_inner().recipes, fallback_recipes(&strings(&["rice"])));
    }

    #[tokio::test]
    async fn test_generate_from_image_chains_identification() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async { Ok(r#"{"ingredients": ["rice", "egg"], "confidence": 0.7}"#.to_string()) })
        });
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("these ingredients: rice, egg"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(recipes_reply(&FIVE)) }));

        let outcome = service(llm)
            .generate_recipes_from_image(GenerateRecipesFromImageInput {
                image_data: png_bytes(),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.value().identified_ingredients, strings(&["rice", "egg"]));
    }

    #[tokio::test]
    async fn test_generate_from_image_marks_degraded_identification() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota".to_string())) })
        });
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(recipes_reply(&FIVE)) }));

        let outcome = service(llm)
            .generate_recipes_from_image(GenerateRecipesFromImageInput {
                image_data: png_bytes(),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap();

        assert!(outcome.is_fallback());
        let suggestions = outcome.into_inner();
        assert_eq!(suggestions.identified_ingredients, vec!["mixed vegetables"]);
        assert_eq!(suggestions.recipes.len(), RECIPE_COUNT);
    }

    #[tokio::test]
    async fn test_generate_from_image_rejects_when_nothing_identified() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async { Ok(r#"{"ingredients": [], "confidence": 0.2}"#.to_string()) })
        });
        llm.expect_generate_with_text().times(0);

        let err = service(llm)
            .generate_recipes_from_image(GenerateRecipesFromImageInput {
                image_data: png_bytes(),
                exclusions: ExclusionList::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
