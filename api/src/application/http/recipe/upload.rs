use axum::extract::{Multipart, multipart::MultipartRejection};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Fields of a multipart image upload.
#[derive(Debug, Default)]
pub struct ImageUpload {
    pub image: Vec<u8>,
    pub content_type: String,
    /// Raw comma separated value of the `exclude_recipe_ids` field.
    pub exclude_recipe_ids: String,
}

pub async fn read_image_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ImageUpload, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut image: Option<(Vec<u8>, String)> = None;
    let mut exclude_recipe_ids = String::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().unwrap_or("").to_string();
                if !content_type.starts_with("image/") {
                    return Err(ApiError::BadRequest("File must be an image".to_string()));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data.to_vec(), content_type));
            }
            "exclude_recipe_ids" => {
                exclude_recipe_ids = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read exclude_recipe_ids: {}", e))
                })?;
            }
            _ => {}
        }
    }

    let (image, content_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    Ok(ImageUpload {
        image,
        content_type,
        exclude_recipe_ids,
    })
}
