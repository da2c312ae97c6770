use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IdentifyIngredientsJsonRequest {
    /// Base64 encoded image, optionally as a `data:` URL.
    #[validate(length(min = 1, message = "No image data provided"))]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesJsonRequest {
    #[validate(length(min = 1, message = "No image data provided"))]
    pub image: String,
    #[serde(default)]
    pub exclude_recipe_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegenerateRecipesRequest {
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub exclude_titles: Vec<String>,
}

/// Multipart form accepted by the upload endpoints, for the API docs.
#[derive(Debug, ToSchema)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Comma separated recipe ids or titles.
    pub exclude_recipe_ids: Option<String>,
}

pub fn decode_base64_image(raw: &str) -> Result<Vec<u8>, ApiError> {
    let raw = raw.trim();
    let encoded = match raw.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => raw,
    };

    // MIME style encoders wrap lines.
    let encoded: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let image = general_purpose::STANDARD
        .decode(&encoded)
        .map_err(|e| ApiError::BadRequest(format!("Invalid base64 image data: {}", e)))?;

    if image.is_empty() {
        return Err(ApiError::BadRequest("No image data provided".to_string()));
    }

    Ok(image)
}
