use crate::domain::recipe::{
    entities::{Difficulty, Recipe},
    helpers::{assign_recipe_ids, title_case},
};

const DEFAULT_PRIMARY: &str = "mixed vegetables";
const DEFAULT_SECONDARY: &str = "onion";

/// Template recipes used when the provider cannot produce any.
///
/// Only the first two ingredients are used, so the result depends on
/// nothing but those two strings.
pub fn fallback_recipes(ingredients: &[String]) -> Vec<Recipe> {
    let pick = |index: usize, default: &str| {
        ingredients
            .get(index)
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    let primary = pick(0, DEFAULT_PRIMARY);
    let secondary = pick(1, DEFAULT_SECONDARY);
    let p = title_case(&primary);
    let s = title_case(&secondary);

    let mut recipes = vec![
        Recipe {
            id: String::new(),
            title: format!("{} and {} Stir Fry", p, s),
            summary: format!("A quick weeknight stir fry of {} and {}.", primary, secondary),
            ingredients: vec![
                format!("2 cups {}, chopped", primary),
                format!("1 cup {}, sliced", secondary),
                "2 tbsp vegetable oil".to_string(),
                "2 tbsp soy sauce".to_string(),
                "1 clove garlic, minced".to_string(),
            ],
            instructions: vec![
                "Heat the oil in a wok or large pan over high heat.".to_string(),
                format!("Add the {} and garlic and stir fry for 2 minutes.", secondary),
                format!("Add the {} and cook for 5-7 minutes until tender.", primary),
                "Stir in the soy sauce, season to taste and serve.".to_string(),
            ],
            cooking_time: 15,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: vec!["Quick".to_string(), "Asian".to_string()],
        },
        Recipe {
            id: String::new(),
            title: format!("Roasted {} with {}", p, s),
            summary: format!("Oven roasted {} with caramelised {}.", primary, secondary),
            ingredients: vec![
                format!("500g {}", primary),
                format!("1 large {}, cut into wedges", secondary),
                "3 tbsp olive oil".to_string(),
                "1 tsp dried thyme".to_string(),
                "Salt and pepper".to_string(),
            ],
            instructions: vec![
                "Preheat the oven to 200C (400F).".to_string(),
                format!("Toss the {} and {} with oil, thyme, salt and pepper.", primary, secondary),
                "Spread on a baking tray in a single layer.".to_string(),
                "Roast for 35-40 minutes, turning halfway, until golden.".to_string(),
            ],
            cooking_time: 45,
            servings: 4,
            difficulty: Difficulty::Medium,
            tags: vec!["Roast".to_string(), "Mediterranean".to_string()],
        },
        Recipe {
            id: String::new(),
            title: format!("Hearty {} and {} Soup", p, s),
            summary: format!("A warming soup built on {} and {}.", primary, secondary),
            ingredients: vec![
                format!("3 cups {}, diced", primary),
                format!("1 {}, diced", secondary),
                "1 litre vegetable stock".to_string(),
                "1 tbsp butter".to_string(),
                "Salt and pepper".to_string(),
            ],
            instructions: vec![
                format!("Melt the butter in a pot and soften the {} for 5 minutes.", secondary),
                format!("Add the {} and cook for another 3 minutes.", primary),
                "Pour in the stock, bring to a boil and simmer for 25 minutes.".to_string(),
                "Blend until smooth if you like, season and serve.".to_string(),
            ],
            cooking_time: 40,
            servings: 4,
            difficulty: Difficulty::Medium,
            tags: vec!["Soup".to_string(), "Comfort Food".to_string()],
        },
        Recipe {
            id: String::new(),
            title: format!("Fresh {} and {} Salad", p, s),
            summary: format!("A bright, crunchy salad of {} and {}.", primary, secondary),
            ingredients: vec![
                format!("2 cups {}, thinly sliced", primary),
                format!("1/2 {}, finely chopped", secondary),
                "2 tbsp olive oil".to_string(),
                "1 tbsp lemon juice".to_string(),
                "Salt and pepper".to_string(),
            ],
            instructions: vec![
                format!("Combine the {} and {} in a large bowl.", primary, secondary),
                "Whisk the olive oil, lemon juice, salt and pepper together.".to_string(),
                "Dress the salad, toss well and serve immediately.".to_string(),
            ],
            cooking_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            tags: vec!["Salad".to_string(), "No Cook".to_string()],
        },
        Recipe {
            id: String::new(),
            title: format!("Baked {} and {} Casserole", p, s),
            summary: format!("A layered casserole of {} and {} under a cheesy crust.", primary, secondary),
            ingredients: vec![
                format!("4 cups {}, sliced", primary),
                format!("2 {}, sliced", secondary),
                "2 cups milk".to_string(),
                "2 tbsp butter".to_string(),
                "2 tbsp flour".to_string(),
                "1 cup grated cheese".to_string(),
            ],
            instructions: vec![
                "Preheat the oven to 180C (350F) and grease a baking dish.".to_string(),
                "Melt the butter, whisk in the flour, then slowly add the milk to make a sauce.".to_string(),
                format!("Layer the {} and {} in the dish, pouring sauce over each layer.", primary, secondary),
                "Top with the cheese and bake for 45 minutes until bubbling and golden.".to_string(),
            ],
            cooking_time: 60,
            servings: 6,
            difficulty: Difficulty::Hard,
            tags: vec!["Baked".to_string(), "Family".to_string()],
        },
    ];

    assign_recipe_ids(&mut recipes);
    recipes
}
