use crate::{
    domain::{
        common::{LarderConfig, entities::app_errors::CoreError, services::Service},
        speech::ports::SpeechSynthesizer,
    },
    infrastructure::{
        llm::GeminiLLMClient,
        speech::{ElevenLabsSpeechClient, GoogleSpeechClient},
    },
};

pub type LarderService = Service<GeminiLLMClient, ElevenLabsSpeechClient, GoogleSpeechClient>;

/// Validates the configuration and wires the HTTP provider clients.
pub fn create_service(config: LarderConfig) -> Result<LarderService, CoreError> {
    config.validate()?;

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
        config.llm.base_url.clone(),
    );

    let speech_synthesizer = ElevenLabsSpeechClient::new(
        config.speech.elevenlabs_api_key.clone(),
        config.speech.voice_id.clone(),
        config.speech.model_id.clone(),
        config.speech.base_url.clone(),
    );

    let speech_transcriber = GoogleSpeechClient::new(
        config.transcription.api_key.clone(),
        config.transcription.project_id.clone(),
        config.transcription.language_code.clone(),
        config.transcription.base_url.clone(),
    );

    if !speech_synthesizer.is_configured() {
        tracing::warn!("ELEVENLABS_API_KEY is not set, text-to-speech is disabled");
    }

    Ok(Service::new(
        config,
        llm_client,
        speech_synthesizer,
        speech_transcriber,
    ))
}
