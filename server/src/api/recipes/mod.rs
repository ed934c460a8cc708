pub mod create;
pub mod delete;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the recipes page (mounted at /app/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/create", post(create::create_recipe))
        .route("/delete", post(delete::delete_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_recipes, create::create_recipe, delete::delete_recipe),
    components(schemas(
        list::RecipesPageResponse,
        create::CreateRecipeForm,
        create::CreateRecipeResponse,
        create::IngredientEntry,
        delete::DeleteRecipeForm,
        delete::DeleteRecipeResponse,
    ))
)]
pub struct ApiDoc;
