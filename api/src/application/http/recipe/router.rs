use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_recipes::{__path_generate_recipes, generate_recipes},
    generate_recipes_json::{__path_generate_recipes_json, generate_recipes_json},
    identify_ingredients::{__path_identify_ingredients, identify_ingredients},
    identify_ingredients_json::{__path_identify_ingredients_json, identify_ingredients_json},
    regenerate_recipes::{__path_regenerate_recipes, regenerate_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    generate_recipes,
    generate_recipes_json,
    identify_ingredients,
    identify_ingredients_json,
    regenerate_recipes
))]
pub struct RecipeApiDoc;

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/api/generate-recipes", post(generate_recipes))
        .route("/api/generate-recipes-json", post(generate_recipes_json))
        .route("/api/identify-ingredients", post(identify_ingredients))
        .route(
            "/api/identify-ingredients-json",
            post(identify_ingredients_json),
        )
        .route("/api/regenerate-recipes", post(regenerate_recipes))
}
