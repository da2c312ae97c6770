pub mod elevenlabs_client;
pub mod google_speech_client;

pub use elevenlabs_client::ElevenLabsSpeechClient;
pub use google_speech_client::GoogleSpeechClient;
