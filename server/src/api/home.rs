use crate::api::ErrorResponse;
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Ingredient, Recipe, RecipeIngredient};
use crate::schema::{ingredients, recipe_ingredients, recipes};
use crate::views::{attach_ingredients, RecipeWithIngredients};
use crate::AppState;
use axum::routing::get;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json, Router,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the app landing page
pub fn router() -> Router<AppState> {
    Router::new().route("/app", get(app_home))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomeResponse {
    pub recipes: Vec<RecipeWithIngredients>,
}

/// App landing page: every recipe with its assembled ingredient lines.
/// The whole tables are loaded and joined in memory.
#[utoipa::path(
    get,
    path = "/app",
    tag = "app",
    responses(
        (status = 200, description = "All recipes with their ingredients", body = HomeResponse),
        (status = 303, description = "No session, redirected to /auth"),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn app_home(
    MaybeAuthUser(user): MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    if user.is_none() {
        return Redirect::to("/auth").into_response();
    }

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

    (StatusCode::OK, Json(HomeResponse { recipes: assembled })).into_response()
}

#[derive(OpenApi)]
#[openapi(paths(app_home), components(schemas(HomeResponse)))]
pub struct ApiDoc;
