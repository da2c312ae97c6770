use crate::domain::{
    assistant::{CONVERSATION_WINDOW, entities::ConversationTurn},
    recipe::entities::Recipe,
};

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The last [`CONVERSATION_WINDOW`] turns of `history`.
pub fn recent_turns(history: &[ConversationTurn]) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(CONVERSATION_WINDOW);
    &history[start..]
}

pub fn build_assistant_prompt(
    recipe: &Recipe,
    history: &[ConversationTurn],
    user_message: &str,
) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "You are a friendly, hands-free cooking assistant helping someone cook a recipe.\n\
         Your replies are read aloud, so answer in one to three short conversational \
         sentences without markdown, lists or emoji.\n\n\
         Recipe: {title}\n\
         Summary: {summary}\n\
         Cooking time: {time} minutes\n\
         Servings: {servings}\n\
         Difficulty: {difficulty:?}\n\n\
         Ingredients:\n{ingredients}\n\n\
         Instructions:\n{instructions}\n",
        title = recipe.title,
        summary = recipe.summary,
        time = recipe.cooking_time,
        servings = recipe.servings,
        difficulty = recipe.difficulty,
        ingredients = ingredients,
        instructions = numbered(&recipe.instructions),
    );

    let turns = recent_turns(history);
    if !turns.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        for turn in turns {
            prompt.push_str(&format!("{}: {}\n", turn.role.label(), turn.content.trim()));
        }
    }

    prompt.push_str(&format!("\nUser: {}\nAssistant:", user_message.trim()));
    prompt
}
