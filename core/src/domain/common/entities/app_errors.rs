use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Provider rejected the request with status {status}: {body}")]
    ProviderRejected { status: u16, body: String },

    #[error("{0}")]
    InternalServerError(String),
}
