use crate::domain::{assistant::entities::ConversationTurn, recipe::entities::Recipe};

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub recipe: Recipe,
    pub conversation_history: Vec<ConversationTurn>,
    pub user_message: String,
}
