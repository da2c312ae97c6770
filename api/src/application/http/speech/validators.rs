use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TextToSpeechRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SpeechToTextRequest {
    /// Base64 encoded 16kHz mono linear PCM recording.
    #[validate(length(min = 1, message = "No audio data provided"))]
    pub audio: String,
    #[schema(example = "audio/wav")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SpeechToTextResponse {
    pub transcript: String,
}
