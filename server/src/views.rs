//! View models returned by the page endpoints, and the in-memory assembly
//! of recipes with their ingredient lines.

use crate::models::{Ingredient, Recipe, RecipeIngredient, User};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// User as exposed to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Ingredient> for IngredientView {
    fn from(ingredient: Ingredient) -> Self {
        IngredientView {
            id: ingredient.id,
            name: ingredient.name,
            description: ingredient.description,
        }
    }
}

/// One ingredient line of an assembled recipe: the catalog entry plus the
/// amount/unit from the join row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IngredientPortion {
    pub id: Uuid,
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub servings: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    pub images: Vec<String>,
    pub difficulty: String,
    pub created_by: Uuid,
}

impl From<Recipe> for RecipeView {
    fn from(recipe: Recipe) -> Self {
        RecipeView {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            instructions: recipe.instructions,
            servings: recipe.servings,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            images: recipe.images.unwrap_or_default().into_iter().flatten().collect(),
            difficulty: recipe.difficulty,
            created_by: recipe.created_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: RecipeView,
    pub ingredients: Vec<IngredientPortion>,
}

/// Stitch every recipe together with its ingredient lines.
///
/// Join rows whose ingredient id is not in the catalog are dropped without
/// an error; a recipe keeps its join rows in their original order. Lookup
/// maps are built once per call, so assembly is linear in rows rather than
/// recipes times join rows.
pub fn attach_ingredients(
    recipes: Vec<Recipe>,
    ingredients: &[Ingredient],
    joins: &[RecipeIngredient],
) -> Vec<RecipeWithIngredients> {
    let ingredients_by_id: HashMap<Uuid, &Ingredient> =
        ingredients.iter().map(|i| (i.id, i)).collect();

    let mut joins_by_recipe: HashMap<Uuid, Vec<&RecipeIngredient>> = HashMap::new();
    for join in joins {
        joins_by_recipe.entry(join.recipe_id).or_default().push(join);
    }

    recipes
        .into_iter()
        .map(|recipe| {
            let portions: Vec<IngredientPortion> = joins_by_recipe
                .get(&recipe.id)
                .map(|rows| {
                    rows.iter()
                        .filter_map(|row| {
                            ingredients_by_id.get(&row.ingredient_id).map(|ingredient| {
                                IngredientPortion {
                                    id: ingredient.id,
                                    name: ingredient.name.clone(),
                                    amount: row.amount.clone(),
                                    unit: row.unit.clone(),
                                }
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();

            RecipeWithIngredients {
                recipe: recipe.into(),
                ingredients: portions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: Uuid, name: &str, created_by: Uuid) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            description: None,
            instructions: Some("Cook it".to_string()),
            servings: 2,
            prep_time: 5,
            cook_time: 10,
            images: None,
            difficulty: "easy".to_string(),
            created_by,
        }
    }

    fn ingredient(id: Uuid, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    fn join(recipe_id: Uuid, ingredient_id: Uuid, amount: &str, unit: &str) -> RecipeIngredient {
        RecipeIngredient {
            id: Uuid::new_v4(),
            recipe_id,
            ingredient_id,
            amount: Some(amount.to_string()),
            unit: Some(unit.to_string()),
        }
    }

    #[test]
    fn resolves_join_rows_to_ingredient_lines() {
        let user = Uuid::new_v4();
        let r = Uuid::new_v4();
        let flour = Uuid::new_v4();
        let water = Uuid::new_v4();

        let assembled = attach_ingredients(
            vec![recipe(r, "Bread", user)],
            &[ingredient(flour, "Flour"), ingredient(water, "Water")],
            &[join(r, flour, "500", "g"), join(r, water, "300", "ml")],
        );

        assert_eq!(assembled.len(), 1);
        assert_eq!(
            assembled[0].ingredients,
            vec![
                IngredientPortion {
                    id: flour,
                    name: "Flour".to_string(),
                    amount: Some("500".to_string()),
                    unit: Some("g".to_string()),
                },
                IngredientPortion {
                    id: water,
                    name: "Water".to_string(),
                    amount: Some("300".to_string()),
                    unit: Some("ml".to_string()),
                },
            ]
        );
    }

    #[test]
    fn drops_join_rows_with_unknown_ingredient() {
        let user = Uuid::new_v4();
        let r = Uuid::new_v4();
        let flour = Uuid::new_v4();

        let assembled = attach_ingredients(
            vec![recipe(r, "Bread", user)],
            &[ingredient(flour, "Flour")],
            &[
                join(r, flour, "500", "g"),
                join(r, Uuid::new_v4(), "1", "pinch"),
            ],
        );

        assert_eq!(assembled[0].ingredients.len(), 1);
        assert_eq!(assembled[0].ingredients[0].name, "Flour");
    }

    #[test]
    fn join_rows_only_attach_to_their_own_recipe() {
        let user = Uuid::new_v4();
        let bread = Uuid::new_v4();
        let soup = Uuid::new_v4();
        let flour = Uuid::new_v4();

        let assembled = attach_ingredients(
            vec![recipe(bread, "Bread", user), recipe(soup, "Soup", user)],
            &[ingredient(flour, "Flour")],
            &[join(bread, flour, "500", "g")],
        );

        assert_eq!(assembled[0].ingredients.len(), 1);
        assert!(assembled[1].ingredients.is_empty());
    }

    #[test]
    fn recipe_without_joins_gets_empty_list() {
        let assembled = attach_ingredients(
            vec![recipe(Uuid::new_v4(), "Toast", Uuid::new_v4())],
            &[],
            &[],
        );
        assert!(assembled[0].ingredients.is_empty());
    }

    #[test]
    fn recipe_view_flattens_image_array() {
        let mut r = recipe(Uuid::new_v4(), "Bread", Uuid::new_v4());
        r.images = Some(vec![Some("https://example.com/a.png".to_string()), None]);
        let view = RecipeView::from(r);
        assert_eq!(view.images, vec!["https://example.com/a.png".to_string()]);
    }
}
