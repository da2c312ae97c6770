use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LivenessResponse {
    pub message: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Recipe Generator API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
