use tracing::{instrument, warn};

use crate::domain::{
    assistant::{
        FALLBACK_REPLY, ports::AssistantService, prompts::build_assistant_prompt,
        value_objects::ChatInput,
    },
    common::{
        entities::{app_errors::CoreError, outcome::Outcome},
        services::Service,
    },
    recipe::ports::LLMClient,
    speech::ports::{SpeechSynthesizer, SpeechTranscriber},
};

impl<LLM, TTS, STT> AssistantService for Service<LLM, TTS, STT>
where
    LLM: LLMClient,
    TTS: SpeechSynthesizer,
    STT: SpeechTranscriber,
{
    #[instrument(
        skip(self, input),
        fields(recipe = %input.recipe.title, history = input.conversation_history.len())
    )]
    async fn chat(&self, input: ChatInput) -> Result<Outcome<String>, CoreError> {
        if input.user_message.trim().is_empty() {
            return Err(CoreError::InvalidInput("User message is required".to_string()));
        }
        if input.recipe.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Recipe is required".to_string()));
        }

        let prompt = build_assistant_prompt(
            &input.recipe,
            &input.conversation_history,
            &input.user_message,
        );

        match self.llm_client.generate_with_text(prompt, None).await {
            Ok(reply) if !reply.trim().is_empty() => Ok(Outcome::Live(reply.trim().to_string())),
            Ok(_) => {
                warn!("Assistant reply was empty, using fallback reply");
                Ok(Outcome::fallback(FALLBACK_REPLY.to_string(), "empty reply"))
            }
            Err(e) => {
                warn!(error = %e, "Assistant reply failed, using fallback reply");
                Ok(Outcome::fallback(FALLBACK_REPLY.to_string(), e.to_string()))
            }
        }
    }
}
