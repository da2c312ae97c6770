use std::path::PathBuf;

use clap::{Parser, builder::BoolishValueParser};
use larder_core::{
    domain::common::{LLMConfig, LarderConfig, SpeechConfig, TranscriptionConfig},
    infrastructure::{
        llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
        speech::{
            elevenlabs_client::DEFAULT_ELEVENLABS_BASE_URL,
            google_speech_client::DEFAULT_GOOGLE_SPEECH_BASE_URL,
        },
    },
};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub speech: SpeechArgs,

    #[command(flatten)]
    pub transcription: TranscriptionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "api-host", env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "api-port", env = "API_PORT", default_value_t = 8000)]
    pub port: u16,

    /// `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "google-api-key", env = "GOOGLE_API_KEY", default_value = "", hide_env_values = true)]
    pub google_api_key: String,

    #[arg(id = "llm_model", long = "llm-model", env = "LLM_MODEL", default_value = "gemini-1.5-pro-latest")]
    pub model: String,

    #[arg(id = "gemini_base_url", long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SpeechArgs {
    #[arg(id = "elevenlabs_api_key", long = "elevenlabs-api-key", env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "elevenlabs-voice-id", env = "ELEVENLABS_VOICE_ID", default_value = "21m00Tcm4TlvDq8ikWAM")]
    pub voice_id: String,

    #[arg(id = "elevenlabs_model_id", long = "elevenlabs-model-id", env = "ELEVENLABS_MODEL_ID", default_value = "eleven_monolingual_v1")]
    pub model_id: String,

    #[arg(id = "elevenlabs_base_url", long = "elevenlabs-base-url", env = "ELEVENLABS_BASE_URL", default_value = DEFAULT_ELEVENLABS_BASE_URL)]
    pub base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TranscriptionArgs {
    /// Defaults to the Gemini key.
    #[arg(id = "google_speech_api_key", long = "google-speech-api-key", env = "GOOGLE_SPEECH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "google-cloud-project", env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: Option<String>,

    #[arg(long = "google-application-credentials", env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_path: Option<PathBuf>,

    #[arg(long = "speech-language-code", env = "SPEECH_LANGUAGE_CODE", default_value = "en-US")]
    pub language_code: String,

    #[arg(id = "google_speech_base_url", long = "google-speech-base-url", env = "GOOGLE_SPEECH_BASE_URL", default_value = DEFAULT_GOOGLE_SPEECH_BASE_URL)]
    pub base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "debug",
        env = "DEBUG",
        default_value = "true",
        value_parser = BoolishValueParser::new(),
        action = clap::ArgAction::Set
    )]
    pub debug: bool,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value = "false",
        value_parser = BoolishValueParser::new(),
        action = clap::ArgAction::Set
    )]
    pub json: bool,
}

impl Args {
    pub fn allows_any_origin(&self) -> bool {
        self.server
            .allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        let speech_api_key = args
            .transcription
            .api_key
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| args.llm.google_api_key.clone());

        LarderConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.google_api_key,
                gemini_model: args.llm.model,
                base_url: args.llm.base_url,
            },
            speech: SpeechConfig {
                elevenlabs_api_key: args.speech.api_key,
                voice_id: args.speech.voice_id,
                model_id: args.speech.model_id,
                base_url: args.speech.base_url,
            },
            transcription: TranscriptionConfig {
                api_key: speech_api_key,
                project_id: args.transcription.project_id,
                credentials_path: args.transcription.credentials_path,
                language_code: args.transcription.language_code,
                base_url: args.transcription.base_url,
            },
            debug: args.log.debug,
        }
    }
}
