use larder_core::domain::{assistant::entities::ConversationTurn, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CookingAssistantRequest {
    pub recipe: Recipe,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    #[validate(length(min = 1, message = "user_message must not be empty"))]
    pub user_message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CookingAssistantResponse {
    pub response: String,
}
