use std::sync::Arc;

use crate::domain::{
    common::LarderConfig,
    recipe::ports::LLMClient,
    speech::ports::{SpeechSynthesizer, SpeechTranscriber},
};

/// Holds the provider adapters every domain service is implemented over.
#[derive(Clone)]
pub struct Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    pub(crate) config: Arc<LarderConfig>,
    pub(crate) llm_client: LLM,
    pub(crate) speech_synthesizer: TTS,
    pub(crate) speech_transcriber: STT,
}

impl<LLM, TTS, STT> Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    pub fn new(
        config: LarderConfig,
        llm_client: LLM,
        speech_synthesizer: TTS,
        speech_transcriber: STT,
    ) -> Self {
        Self {
            config: Arc::new(config),
            llm_client,
            speech_synthesizer,
            speech_transcriber,
        }
    }

    pub fn config(&self) -> &LarderConfig {
        &self.config
    }
}
