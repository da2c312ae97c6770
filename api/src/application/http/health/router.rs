use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    health_check::{__path_health_check, health_check},
    liveness::{__path_liveness, liveness},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(liveness, health_check))]
pub struct HealthApiDoc;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}
