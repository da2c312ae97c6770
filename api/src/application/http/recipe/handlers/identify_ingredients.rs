use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::HeaderMap,
};
use larder_core::domain::recipe::{
    entities::IngredientIdentification, ports::RecipeService,
    value_objects::IdentifyIngredientsInput,
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
    path = "/identify-ingredients",
    tag = "recipe",
    summary = "Identify ingredients from an uploaded image",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = IngredientIdentification),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse)
    ),
)]
pub async fn identify_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<IngredientIdentification>, ApiError> {
    log_request_headers("identify-ingredients", &headers);

    let upload = read_image_upload(multipart).await?;
    info!(
        image_bytes = upload.image.len(),
        content_type = %upload.content_type,
        "Image upload received"
    );

    let result = state
        .service
        .identify_ingredients(IdentifyIngredientsInput {
            image_data: upload.image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(result))
}
