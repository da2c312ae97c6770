use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, instrument, warn};

use crate::domain::{
    common::{
        entities::{app_errors::CoreError, outcome::Outcome},
        services::Service,
    },
    recipe::ports::LLMClient,
    speech::{
        entities::SynthesizedAudio,
        ports::{SpeechService, SpeechSynthesizer, SpeechTranscriber},
        value_objects::{AudioFormat, SynthesizeSpeechInput, TranscribeAudioInput},
    },
};

impl<LLM, TTS, STT> SpeechService for Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    #[instrument(skip(self, input), fields(chars = input.text.chars().count()))]
    async fn synthesize_speech(
        &self,
        input: SynthesizeSpeechInput,
    ) -> Result<SynthesizedAudio, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::InvalidInput("Text is required".to_string()));
        }

        if !self.speech_synthesizer.is_configured() {
            return Err(CoreError::ConfigurationError(
                "ElevenLabs API key not configured".to_string(),
            ));
        }

        self.speech_synthesizer.synthesize(input.text).await
    }

    #[instrument(skip(self, input), fields(encoded_bytes = input.audio.len()))]
    async fn transcribe_audio(
        &self,
        input: TranscribeAudioInput,
    ) -> Result<Outcome<String>, CoreError> {
        // MIME style encoders wrap lines.
        let encoded: String = input
            .audio
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if encoded.is_empty() {
            return Err(CoreError::InvalidInput("No audio data provided".to_string()));
        }

        let audio = general_purpose::STANDARD
            .decode(&encoded)
            .map_err(|e| CoreError::InvalidInput(format!("Invalid base64 audio data: {}", e)))?;
        if audio.is_empty() {
            return Err(CoreError::InvalidInput("No audio data provided".to_string()));
        }

        let format = AudioFormat::client_recording(input.mime_type.as_deref());
        debug!(mime_type = %format.mime_type, audio_bytes = audio.len(), "Transcribing audio");

        match self.speech_transcriber.transcribe(audio, format).await {
            Ok(transcript) => Ok(Outcome::Live(transcript.trim().to_string())),
            Err(e) => {
                warn!(error = %e, "Transcription failed, returning empty transcript");
                Ok(Outcome::fallback(String::new(), e.to_string()))
            }
        }
    }
}
