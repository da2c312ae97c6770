use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    speech_to_text::{__path_speech_to_text, speech_to_text},
    text_to_speech::{__path_text_to_speech, text_to_speech},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(text_to_speech, speech_to_text))]
pub struct SpeechApiDoc;

pub fn speech_routes() -> Router<AppState> {
    Router::new()
        .route("/api/text-to-speech", post(text_to_speech))
        .route("/api/speech-to-text", post(speech_to_text))
}
