use axum::{extract::State, http::HeaderMap};
use larder_core::domain::recipe::{
    entities::RecipeSuggestions,
    ports::RecipeService,
    value_objects::{ExclusionList, GenerateRecipesInput},
};
use tracing::info;

use crate::application::http::{
    recipe::validators::RegenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
        request_logging::log_request_headers,
    },
};

#[utoipa::path(
    post,
    path = "/regenerate-recipes",
    tag = "recipe",
    summary = "Suggest new recipes for known ingredients",
    description = "Skips image identification. Recipes whose title matches `exclude_titles` are not suggested again.",
    request_body = RegenerateRecipesRequest,
    responses(
        (status = 200, body = RecipeSuggestions),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn regenerate_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<RegenerateRecipesRequest>,
) -> Result<Response<RecipeSuggestions>, ApiError> {
    log_request_headers("regenerate-recipes", &headers);
    info!(
        ingredients = payload.ingredients.len(),
        exclusions = payload.exclude_titles.len(),
        "Regenerating recipes"
    );

    let result = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: payload.ingredients,
            exclusions: ExclusionList::new(&payload.exclude_titles),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(result))
}
