use axum::{extract::State, http::HeaderMap};
use larder_core::domain::recipe::{
    entities::IngredientIdentification, ports::RecipeService,
    value_objects::IdentifyIngredientsInput,
};
use tracing::info;

use crate::application::http::{
    recipe::validators::{IdentifyIngredientsJsonRequest, decode_base64_image},
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
    path = "/identify-ingredients-json",
    tag = "recipe",
    summary = "Identify ingredients from a base64 encoded image",
    request_body = IdentifyIngredientsJsonRequest,
    responses(
        (status = 200, body = IngredientIdentification),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn identify_ingredients_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<IdentifyIngredientsJsonRequest>,
) -> Result<Response<IngredientIdentification>, ApiError> {
    log_request_headers("identify-ingredients-json", &headers);

    let image_data = decode_base64_image(&payload.image)?;
    info!(image_bytes = image_data.len(), "Base64 image decoded");

    let result = state
        .service
        .identify_ingredients(IdentifyIngredientsInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(result))
}
