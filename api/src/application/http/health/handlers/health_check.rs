use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResponse {
    Healthy {
        model: String,
        debug: bool,
        text_to_speech: bool,
    },
    Unhealthy {
        error: String,
    },
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Configuration health check",
    description = "Re-validates the process configuration",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, body = HealthResponse)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.service.health().await {
        Ok(health) => (
            StatusCode::OK,
            Json(HealthResponse::Healthy {
                model: health.model,
                debug: health.debug,
                text_to_speech: health.text_to_speech,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Unhealthy {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
