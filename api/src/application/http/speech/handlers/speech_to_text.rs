use axum::{extract::State, http::HeaderMap};
use larder_core::domain::speech::{ports::SpeechService, value_objects::TranscribeAudioInput};
use tracing::info;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
        request_logging::log_request_headers,
    },
    speech::validators::{SpeechToTextRequest, SpeechToTextResponse},
};

#[utoipa::path(
    post,
    path = "/speech-to-text",
    tag = "speech",
    summary = "Transcribe a recording",
    description = "Provider failures yield an empty transcript rather than an error.",
    request_body = SpeechToTextRequest,
    responses(
        (status = 200, body = SpeechToTextResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn speech_to_text(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<SpeechToTextRequest>,
) -> Result<Response<SpeechToTextResponse>, ApiError> {
    log_request_headers("speech-to-text", &headers);
    info!(
        audio_base64_chars = payload.audio.len(),
        mime_type = payload.mime_type.as_deref().unwrap_or("-"),
        "Transcribing audio"
    );

    let transcript = state
        .service
        .transcribe_audio(TranscribeAudioInput {
            audio: payload.audio,
            mime_type: payload.mime_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::from(
        transcript.map(|transcript| SpeechToTextResponse { transcript }),
    ))
}
