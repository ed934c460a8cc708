use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{recipe_ingredients, recipes};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecipeForm {
    #[serde(default)]
    pub recipe_id: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub success: bool,
}

/// Deletes a recipe and its join rows, in that order (the schema has no
/// cascading deletes). A recipe id that matches nothing is a no-op success.
///
/// TODO: scope the delete to recipes the requester owns - right now any
/// session can delete any recipe.
#[utoipa::path(
    post,
    path = "/app/recipes/delete",
    tag = "recipes",
    request_body(content = DeleteRecipeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Recipe deleted (or did not exist)", body = DeleteRecipeResponse),
        (status = 400, description = "Missing recipe ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_recipe(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Form(form): Form<DeleteRecipeForm>,
) -> impl IntoResponse {
    if form.recipe_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing recipe ID".to_string(),
            }),
        )
            .into_response();
    }

    // An id we never issued cannot match a row; same outcome as deleting a
    // recipe that is already gone
    let Ok(recipe_id) = Uuid::parse_str(&form.recipe_id) else {
        return (StatusCode::OK, Json(DeleteRecipeResponse { success: true })).into_response();
    };

    let mut conn = get_conn!(pool);

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        diesel::delete(
            recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe_id)),
        )
        .execute(conn)?;

        diesel::delete(recipes::table.find(recipe_id)).execute(conn)?;

        Ok(())
    });

    match result {
        Ok(()) => (StatusCode::OK, Json(DeleteRecipeResponse { success: true })).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
