use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response as AxumResponse},
};
use larder_core::domain::speech::{ports::SpeechService, value_objects::SynthesizeSpeechInput};
use tracing::info;

const AUDIO_MPEG: &str = "audio/mpeg";

use crate::application::http::{
    server::{
        api_entities::api_error::{ApiError, ApiErrorResponse, ValidateJson},
        app_state::AppState,
        request_logging::log_request_headers,
    },
    speech::validators::TextToSpeechRequest,
};

#[utoipa::path(
    post,
    path = "/text-to-speech",
    tag = "speech",
    summary = "Synthesize speech",
    description = "Returns the provider's MPEG audio unmodified.",
    request_body = TextToSpeechRequest,
    responses(
        (status = 200, content_type = "audio/mpeg", body = Vec<u8>),
        (status = 400, body = ApiErrorResponse),
        (status = 503, description = "Text-to-speech is not configured", body = ApiErrorResponse)
    ),
)]
pub async fn text_to_speech(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<TextToSpeechRequest>,
) -> Result<AxumResponse, ApiError> {
    log_request_headers("text-to-speech", &headers);
    info!(text_chars = payload.text.chars().count(), "Synthesizing speech");

    let audio = state
        .service
        .synthesize_speech(SynthesizeSpeechInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, AUDIO_MPEG)],
        audio.bytes,
    )
        .into_response())
}
