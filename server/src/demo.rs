//! Built-in demo recipes. The content ships with the binary and is usable
//! without a database; `--seed-demo` copies it into the store for a fresh
//! install.

use crate::auth::hash_password;
use crate::models::{Difficulty, NewIngredient, NewRecipe, NewRecipeIngredient, NewUser};
use crate::schema::{ingredients, recipe_ingredients, recipes, users};
use diesel::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

/// Account that owns the demo recipes after seeding.
pub const DEMO_EMAIL: &str = "demo@thefridge.dev";
const DEMO_NAME: &str = "Demo Cook";
const DEMO_PASSWORD: &str = "demo-password";

pub struct DemoIngredient {
    pub name: &'static str,
    pub quantity: &'static str,
    pub required: bool,
}

pub struct DemoRecipe {
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub servings: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    pub image: &'static str,
    pub difficulty: Difficulty,
    pub ingredients: &'static [DemoIngredient],
}

pub const DEMO_RECIPES: &[DemoRecipe] = &[
    DemoRecipe {
        name: "Spaghetti Carbonara",
        description: "Classic Italian pasta dish with eggs, cheese, and pancetta",
        instructions: "Cook pasta, mix with egg and cheese mixture, add pancetta",
        servings: 4,
        prep_time: 15,
        cook_time: 20,
        image: "https://www.allrecipes.com/thmb/Vg2cRidr2zcYhWGvPD8M18xM_WY=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/11973-spaghetti-carbonara-ii-DDMFS-4x3-6edea51e421e4457ac0c3269f3be5157.jpg",
        difficulty: Difficulty::Medium,
        ingredients: &[
            DemoIngredient { name: "Spaghetti", quantity: "400g", required: true },
            DemoIngredient { name: "Eggs", quantity: "4", required: true },
            DemoIngredient { name: "Parmesan cheese", quantity: "100g", required: true },
            DemoIngredient { name: "Pancetta", quantity: "150g", required: true },
            DemoIngredient { name: "Black pepper", quantity: "to taste", required: false },
            DemoIngredient { name: "Salt", quantity: "to taste", required: false },
        ],
    },
    DemoRecipe {
        name: "Avocado Toast",
        description: "Simple and nutritious breakfast option",
        instructions: "Toast bread, mash avocado, spread on toast, add toppings",
        servings: 2,
        prep_time: 5,
        cook_time: 5,
        image: "https://www.eatingwell.com/thmb/PM3UlLhM0VbE6dcq9ZFwCnMyWHI=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/EatingWell-April-Avocado-Toast-Directions-04-5b5b86524a3d4b35ac4c57863f6095dc.jpg",
        difficulty: Difficulty::Easy,
        ingredients: &[
            DemoIngredient { name: "Bread slices", quantity: "2", required: true },
            DemoIngredient { name: "Avocado", quantity: "1", required: true },
            DemoIngredient { name: "Lemon juice", quantity: "1 tsp", required: false },
            DemoIngredient { name: "Salt", quantity: "to taste", required: false },
            DemoIngredient { name: "Chili flakes", quantity: "optional", required: false },
        ],
    },
    DemoRecipe {
        name: "Beef Wellington",
        description: "Elegant dish of beef tenderloin wrapped in puff pastry",
        instructions: "Sear beef, wrap in mushroom duxelles and puff pastry, bake",
        servings: 6,
        prep_time: 60,
        cook_time: 45,
        image: "https://grillmomma.com/wp-content/uploads/2020/12/IMG_1986_jpg-3-scaled-e1609300974309.jpg",
        difficulty: Difficulty::Hard,
        ingredients: &[
            DemoIngredient { name: "Beef tenderloin", quantity: "1kg", required: true },
            DemoIngredient { name: "Puff pastry", quantity: "500g", required: true },
            DemoIngredient { name: "Mushroom", quantity: "300g", required: true },
            DemoIngredient { name: "Prosciutto", quantity: "200g", required: true },
            DemoIngredient { name: "Eggs", quantity: "1", required: true },
            DemoIngredient { name: "Salt and pepper", quantity: "to taste", required: false },
        ],
    },
    DemoRecipe {
        name: "Greek Salad",
        description: "Fresh Mediterranean salad with feta cheese and olives",
        instructions: "Chop vegetables, mix with olive oil and lemon dressing",
        servings: 4,
        prep_time: 15,
        cook_time: 0,
        image: "https://www.simplyrecipes.com/thmb/0NrKQlJ691l6L9tZXpL06uOuWis=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/Simply-Recipes-Easy-Greek-Salad-LEAD-2-4601eff771fd4de38f9722e8cafc897a.jpg",
        difficulty: Difficulty::Easy,
        ingredients: &[
            DemoIngredient { name: "Cucumber", quantity: "1", required: true },
            DemoIngredient { name: "Tomato", quantity: "3", required: true },
            DemoIngredient { name: "Red onion", quantity: "1", required: true },
            DemoIngredient { name: "Feta cheese", quantity: "150g", required: true },
            DemoIngredient { name: "Black olive", quantity: "100g", required: true },
            DemoIngredient { name: "Olive oil", quantity: "2 tbsp", required: false },
            DemoIngredient { name: "Lemon juice", quantity: "1 tbsp", required: false },
        ],
    },
    DemoRecipe {
        name: "Chicken Curry",
        description: "Aromatic and spicy Indian-inspired dish",
        instructions: "Cook chicken with curry paste, add coconut milk and simmer",
        servings: 4,
        prep_time: 20,
        cook_time: 30,
        image: "https://ichef.bbci.co.uk/food/ic/food_16x9_1600/recipes/chicken_curry_61994_16x9.jpg",
        difficulty: Difficulty::Medium,
        ingredients: &[
            DemoIngredient { name: "Chicken breast", quantity: "500g", required: true },
            DemoIngredient { name: "Curry paste", quantity: "3 tbsp", required: false },
            DemoIngredient { name: "Coconut milk", quantity: "400ml", required: false },
            DemoIngredient { name: "Onion", quantity: "1", required: true },
            DemoIngredient { name: "Garlic cloves", quantity: "2", required: true },
            DemoIngredient { name: "Ginger", quantity: "1 tbsp, grated", required: false },
            DemoIngredient { name: "Salt", quantity: "to taste", required: false },
        ],
    },
    DemoRecipe {
        name: "Chocolate Souffle",
        description: "Decadent French dessert that rises in the oven",
        instructions: "Prepare chocolate base, fold in egg whites, bake carefully",
        servings: 4,
        prep_time: 30,
        cook_time: 15,
        image: "https://www.flavoursholidays.co.uk/wp-content/uploads/2022/02/Chocolate-souffle-SM.jpg",
        difficulty: Difficulty::Hard,
        ingredients: &[
            DemoIngredient { name: "Dark chocolate", quantity: "200g", required: true },
            DemoIngredient { name: "Butter", quantity: "50g", required: true },
            DemoIngredient { name: "Eggs", quantity: "4", required: true },
            DemoIngredient { name: "Sugar", quantity: "50g", required: true },
            DemoIngredient { name: "Flour", quantity: "1 tbsp", required: false },
        ],
    },
];

pub enum SeedOutcome {
    Seeded,
    AlreadyPresent,
}

/// Copy the demo content into the store: one demo user, a deduplicated
/// ingredient catalog, the recipes, and their join rows, all in one
/// transaction. Skips entirely when the demo user already exists.
pub fn seed(conn: &mut PgConnection) -> Result<SeedOutcome, diesel::result::Error> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        users::table.filter(users::email.eq(DEMO_EMAIL)),
    ))
    .get_result(conn)?;
    if exists {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");

    conn.transaction(|conn| {
        let user_id: Uuid = diesel::insert_into(users::table)
            .values(&NewUser {
                email: DEMO_EMAIL,
                name: DEMO_NAME,
                password_hash: &password_hash,
            })
            .returning(users::id)
            .get_result(conn)?;

        // One catalog row per distinct ingredient name
        let mut catalog: HashMap<&str, Uuid> = HashMap::new();
        for recipe in DEMO_RECIPES {
            for ingredient in recipe.ingredients {
                if !catalog.contains_key(ingredient.name) {
                    let id: Uuid = diesel::insert_into(ingredients::table)
                        .values(&NewIngredient {
                            name: ingredient.name,
                            description: None,
                        })
                        .returning(ingredients::id)
                        .get_result(conn)?;
                    catalog.insert(ingredient.name, id);
                }
            }
        }

        for recipe in DEMO_RECIPES {
            let recipe_id: Uuid = diesel::insert_into(recipes::table)
                .values(&NewRecipe {
                    name: recipe.name,
                    description: Some(recipe.description),
                    instructions: Some(recipe.instructions),
                    servings: recipe.servings,
                    prep_time: recipe.prep_time,
                    cook_time: recipe.cook_time,
                    images: Some(vec![Some(recipe.image.to_string())]),
                    difficulty: recipe.difficulty.as_str(),
                    created_by: user_id,
                })
                .returning(recipes::id)
                .get_result(conn)?;

            let rows: Vec<NewRecipeIngredient> = recipe
                .ingredients
                .iter()
                .map(|ingredient| NewRecipeIngredient {
                    recipe_id,
                    ingredient_id: catalog[ingredient.name],
                    amount: Some(ingredient.quantity),
                    unit: None,
                })
                .collect();

            diesel::insert_into(recipe_ingredients::table)
                .values(&rows)
                .execute(conn)?;
        }

        Ok(SeedOutcome::Seeded)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ships_six_demo_recipes() {
        assert_eq!(DEMO_RECIPES.len(), 6);
        let names: HashSet<&str> = DEMO_RECIPES.iter().map(|r| r.name).collect();
        assert!(names.contains("Spaghetti Carbonara"));
        assert!(names.contains("Beef Wellington"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn every_demo_recipe_is_presentable() {
        for recipe in DEMO_RECIPES {
            assert!(!recipe.instructions.is_empty(), "{}", recipe.name);
            assert!(recipe.servings > 0, "{}", recipe.name);
            assert!(recipe.prep_time > 0, "{}", recipe.name);
            assert!(recipe.cook_time >= 0, "{}", recipe.name);
            assert!(!recipe.ingredients.is_empty(), "{}", recipe.name);
            assert!(recipe.ingredients.iter().any(|i| i.required), "{}", recipe.name);
        }
    }

    #[test]
    fn shared_ingredients_repeat_across_recipes() {
        // dedup in seed() only matters because names actually repeat
        let mut seen = HashSet::new();
        let mut repeated = false;
        for recipe in DEMO_RECIPES {
            for ingredient in recipe.ingredients {
                if !seen.insert(ingredient.name) {
                    repeated = true;
                }
            }
        }
        assert!(repeated);
    }
}
