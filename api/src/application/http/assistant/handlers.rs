pub mod cooking_assistant;
