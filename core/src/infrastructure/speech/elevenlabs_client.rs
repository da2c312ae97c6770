use reqwest::{Client, header};
use serde::Serialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    speech::{entities::SynthesizedAudio, ports::SpeechSynthesizer},
};

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const AUDIO_MPEG: &str = "audio/mpeg";

#[derive(Debug, Clone)]
pub struct ElevenLabsSpeechClient {
    api_key: Option<String>,
    voice_id: String,
    model_id: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl ElevenLabsSpeechClient {
    pub fn new(
        api_key: Option<String>,
        voice_id: String,
        model_id: String,
        base_url: String,
    ) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            voice_id,
            model_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl SpeechSynthesizer for ElevenLabsSpeechClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn synthesize(&self, text: String) -> Result<SynthesizedAudio, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ConfigurationError("ElevenLabs API key not configured".to_string())
        })?;

        let url = format!("{}/text-to-speech/{}", self.base_url, self.voice_id);
        let request = TextToSpeechRequest {
            text: &text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.5,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header(header::ACCEPT, AUDIO_MPEG)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {}", e);
                CoreError::ExternalServiceError(format!("Text-to-speech error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("ElevenLabs API error: {} - {}", status, body);
            return Err(CoreError::ProviderRejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs audio: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read audio: {}", e))
        })?;

        tracing::info!(audio_bytes = bytes.len(), "Speech synthesized");

        Ok(SynthesizedAudio { bytes })
    }
}
