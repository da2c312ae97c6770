use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    speech::{ports::SpeechTranscriber, value_objects::AudioFormat},
};

pub const DEFAULT_GOOGLE_SPEECH_BASE_URL: &str = "https://speech.googleapis.com/v1";

/// Google Cloud Speech-to-Text `speech:recognize` client.
#[derive(Debug, Clone)]
pub struct GoogleSpeechClient {
    api_key: String,
    project_id: Option<String>,
    language_code: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: &'static str,
    sample_rate_hertz: u32,
    audio_channel_count: u8,
    language_code: String,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechRecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct SpeechRecognitionResult {
    #[serde(default)]
    alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct SpeechRecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

impl GoogleSpeechClient {
    pub fn new(
        api_key: String,
        project_id: Option<String>,
        language_code: String,
        base_url: String,
    ) -> Self {
        Self {
            api_key,
            project_id: project_id.filter(|id| !id.trim().is_empty()),
            language_code,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl SpeechTranscriber for GoogleSpeechClient {
    async fn transcribe(&self, audio: Vec<u8>, format: AudioFormat) -> Result<String, CoreError> {
        let url = format!("{}/speech:recognize?key={}", self.base_url, self.api_key);

        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: format.encoding.as_str(),
                sample_rate_hertz: format.sample_rate_hertz,
                audio_channel_count: format.channel_count,
                language_code: self.language_code.clone(),
            },
            audio: RecognitionAudio {
                content: general_purpose::STANDARD.encode(&audio),
            },
        };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(project_id) = &self.project_id {
            builder = builder.header("x-goog-user-project", project_id);
        }

        let response = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Speech-to-text request failed: {}", e);
            CoreError::ExternalServiceError(format!("Speech-to-text error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Speech-to-text API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Speech-to-text returned error: {} - {}",
                status, error_text
            )));
        }

        let recognized: RecognizeResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse speech-to-text response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse transcript: {}", e))
        })?;

        let transcript = recognized
            .results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next())
            .map(|alternative| alternative.transcript)
            .unwrap_or_default();

        Ok(transcript)
    }
}
