use std::future::Future;

use crate::domain::{
    assistant::value_objects::ChatInput,
    common::entities::{app_errors::CoreError, outcome::Outcome},
};

/// Service trait for the hands-free cooking assistant
#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    /// Produces one assistant utterance for the recipe being cooked.
    fn chat(
        &self,
        input: ChatInput,
    ) -> impl Future<Output = Result<Outcome<String>, CoreError>> + Send;
}
