use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::HeaderMap,
};
use larder_core::domain::recipe::{
    entities::RecipeSuggestions,
    ports::RecipeService,
    value_objects::{ExclusionList, GenerateRecipesFromImageInput},
};
use tracing::info;

use crate::application::http::{
    recipe::{upload::read_image_upload, validators::ImageUploadForm},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
        request_logging::log_request_headers,
    },
};

#[utoipa::path(
    post,
    path = "/generate-recipes",
    tag = "recipe",
    summary = "Generate recipes from an uploaded image",
    description = "Identifies the ingredients in the image, then suggests five recipes. \
                   `exclude_recipe_ids` lists comma separated recipe ids or titles already shown.",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecipeSuggestions),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse)
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<RecipeSuggestions>, ApiError> {
    log_request_headers("generate-recipes", &headers);

    let upload = read_image_upload(multipart).await?;
    let exclusions = ExclusionList::from_comma_separated(&upload.exclude_recipe_ids);
    info!(
        image_bytes = upload.image.len(),
        content_type = %upload.content_type,
        exclusions = exclusions.len(),
        "Image upload received"
    );

    let result = state
        .service
        .generate_recipes_from_image(GenerateRecipesFromImageInput {
            image_data: upload.image,
            exclusions,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(result))
}
