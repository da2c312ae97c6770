pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/wav";

#[derive(Debug, Clone)]
pub struct SynthesizeSpeechInput {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct TranscribeAudioInput {
    /// Base64 encoded recording.
    pub audio: String,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}

/// Recording parameters declared to the transcription provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFormat {
    pub mime_type: String,
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub channel_count: u8,
}

impl AudioFormat {
    /// The mobile client always records 16kHz mono linear PCM, whatever
    /// container it reports.
    pub fn client_recording(mime_type: Option<&str>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME_TYPE)
            .to_string();

        Self {
            mime_type,
            encoding: AudioEncoding::Linear16,
            sample_rate_hertz: 16_000,
            channel_count: 1,
        }
    }
}
