use axum::{extract::State, http::HeaderMap};
use larder_core::domain::recipe::{
    entities::RecipeSuggestions,
    ports::RecipeService,
    value_objects::{ExclusionList, GenerateRecipesFromImageInput},
};
use tracing::info;

use crate::application::http::{
    recipe::validators::{GenerateRecipesJsonRequest, decode_base64_image},
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
    path = "/generate-recipes-json",
    tag = "recipe",
    summary = "Generate recipes from a base64 encoded image",
    request_body = GenerateRecipesJsonRequest,
    responses(
        (status = 200, body = RecipeSuggestions),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn generate_recipes_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<GenerateRecipesJsonRequest>,
) -> Result<Response<RecipeSuggestions>, ApiError> {
    log_request_headers("generate-recipes-json", &headers);

    let image_data = decode_base64_image(&payload.image)?;
    let exclusions = ExclusionList::new(&payload.exclude_recipe_ids);
    info!(
        image_bytes = image_data.len(),
        exclusions = exclusions.len(),
        "Base64 image decoded"
    );

    let result = state
        .service
        .generate_recipes_from_image(GenerateRecipesFromImageInput {
            image_data,
            exclusions,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(result))
}
