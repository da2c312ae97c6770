pub mod generate_recipes;
pub mod generate_recipes_json;
pub mod identify_ingredients;
pub mod identify_ingredients_json;
pub mod regenerate_recipes;
