use std::path::PathBuf;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub llm: LLMConfig,
    pub speech: SpeechConfig,
    pub transcription: TranscriptionConfig,
    pub debug: bool,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct SpeechConfig {
    pub elevenlabs_api_key: Option<String>,
    pub voice_id: String,
    pub model_id: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct TranscriptionConfig {
    pub api_key: String,
    pub project_id: Option<String>,
    pub credentials_path: Option<PathBuf>,
    pub language_code: String,
    pub base_url: String,
}

impl LarderConfig {
    /// Fails when a credential the service cannot start without is missing.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.llm.gemini_api_key.trim().is_empty() {
            return Err(CoreError::ConfigurationError(
                "GOOGLE_API_KEY environment variable is required".to_string(),
            ));
        }

        if self.llm.gemini_model.trim().is_empty() {
            return Err(CoreError::ConfigurationError(
                "LLM_MODEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
