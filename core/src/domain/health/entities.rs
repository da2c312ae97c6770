use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConfigurationHealth {
    pub model: String,
    pub debug: bool,
    pub text_to_speech: bool,
}
