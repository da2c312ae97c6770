use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::ConfigurationHealth, ports::HealthCheckService},
    recipe::ports::LLMClient,
    speech::ports::{SpeechSynthesizer, SpeechTranscriber},
};

impl<LLM, TTS, STT> HealthCheckService for Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    async fn health(&self) -> Result<ConfigurationHealth, CoreError> {
        self.config.validate()?;

        Ok(ConfigurationHealth {
            model: self.config.llm.gemini_model.clone(),
            debug: self.config.debug,
            text_to_speech: self.speech_synthesizer.is_configured(),
        })
    }
}
