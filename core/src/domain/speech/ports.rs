use std::future::Future;

use crate::domain::{
    common::entities::{app_errors::CoreError, outcome::Outcome},
    speech::{
        entities::SynthesizedAudio,
        value_objects::{AudioFormat, SynthesizeSpeechInput, TranscribeAudioInput},
    },
};

/// Text-to-speech provider
#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send + Sync {
    /// Whether a credential is available. Synthesis is never attempted
    /// without one.
    fn is_configured(&self) -> bool;

    fn synthesize(
        &self,
        text: String,
    ) -> impl Future<Output = Result<SynthesizedAudio, CoreError>> + Send;
}

/// Speech-to-text provider
#[cfg_attr(test, mockall::automock)]
pub trait SpeechTranscriber: Send + Sync {
    /// Returns the top transcript, or an empty string when nothing was
    /// recognised.
    fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechService: Send + Sync {
    fn synthesize_speech(
        &self,
        input: SynthesizeSpeechInput,
    ) -> impl Future<Output = Result<SynthesizedAudio, CoreError>> + Send;

    /// Never fails because of the provider: provider errors resolve to an
    /// empty transcript.
    fn transcribe_audio(
        &self,
        input: TranscribeAudioInput,
    ) -> impl Future<Output = Result<Outcome<String>, CoreError>> + Send;
}
