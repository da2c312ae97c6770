use axum::{extract::State, http::HeaderMap};
use larder_core::domain::assistant::{ports::AssistantService, value_objects::ChatInput};
use tracing::info;

use crate::application::http::{
    assistant::validators::{CookingAssistantRequest, CookingAssistantResponse},
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
    path = "/cooking-assistant",
    tag = "assistant",
    summary = "Ask the cooking assistant about a recipe",
    description = "Answers one user message in the context of the recipe and the recent conversation.",
    request_body = CookingAssistantRequest,
    responses(
        (status = 200, body = CookingAssistantResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn cooking_assistant(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<CookingAssistantRequest>,
) -> Result<Response<CookingAssistantResponse>, ApiError> {
    log_request_headers("cooking-assistant", &headers);
    info!(
        recipe = %payload.recipe.title,
        history_turns = payload.conversation_history.len(),
        message_chars = payload.user_message.chars().count(),
        "Cooking assistant turn"
    );

    let reply = state
        .service
        .chat(ChatInput {
            recipe: payload.recipe,
            conversation_history: payload.conversation_history,
            user_message: payload.user_message,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(
        reply.map(|response| CookingAssistantResponse { response }),
    ))
}
