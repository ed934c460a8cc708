use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Ingredient, Recipe, RecipeIngredient};
use crate::schema::{ingredients, recipe_ingredients, recipes};
use crate::views::{attach_ingredients, IngredientView, RecipeWithIngredients};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipesPageResponse {
    pub recipes: Vec<RecipeWithIngredients>,
    /// The full ingredient catalog, for the create-recipe picker.
    pub ingredients: Vec<IngredientView>,
}

/// Recipes page: every recipe with its ingredient lines, plus the
/// ingredient catalog itself.
#[utoipa::path(
    get,
    path = "/app/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Recipes and ingredient catalog", body = RecipesPageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_recipes(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let all_recipes: Vec<Recipe> = match recipes::table.select(Recipe::as_select()).load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let all_ingredients: Vec<Ingredient> = match ingredients::table
        .select(Ingredient::as_select())
        .load(&mut conn)
    {
        Ok(i) => i,
        Err(e) => {
            tracing::error!("Failed to load ingredients: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let joins: Vec<RecipeIngredient> = match recipe_ingredients::table
        .select(RecipeIngredient::as_select())
        .load(&mut conn)
    {
        Ok(j) => j,
        Err(e) => {
            tracing::error!("Failed to load recipe ingredients: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let assembled = attach_ingredients(all_recipes, &all_ingredients, &joins);

    (
        StatusCode::OK,
        Json(RecipesPageResponse {
            recipes: assembled,
            ingredients: all_ingredients.into_iter().map(IngredientView::from).collect(),
        }),
    )
        .into_response()
}
