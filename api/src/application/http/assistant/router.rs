use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::cooking_assistant::{__path_cooking_assistant, cooking_assistant};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(cooking_assistant))]
pub struct AssistantApiDoc;

pub fn assistant_routes() -> Router<AppState> {
    Router::new().route("/api/cooking-assistant", post(cooking_assistant))
}
