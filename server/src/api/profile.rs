use crate::api::ErrorResponse;
use crate::auth::MaybeAuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{fridge_items, recipes, saved_recipes};
use crate::views::UserView;
use crate::AppState;
use axum::routing::get;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the profile page
pub fn router() -> Router<AppState> {
    Router::new().route("/app/profile", get(profile))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: Option<UserView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_recipes_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes_uploaded_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_in_fridge_count: Option<i64>,
}

/// Profile page: the current user plus three per-user counts, computed
/// fresh on every request. Degrades to `{"user": null}` without a session.
#[utoipa::path(
    get,
    path = "/app/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile statistics", body = ProfileResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn profile(
    MaybeAuthUser(user): MaybeAuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return (
            StatusCode::OK,
            Json(ProfileResponse {
                user: None,
                saved_recipes_count: None,
                recipes_uploaded_count: None,
                items_in_fridge_count: None,
            }),
        )
            .into_response();
    };

    let mut conn = get_conn!(pool);

    let saved_recipes_count: i64 = match saved_recipes::table
        .filter(saved_recipes::user_id.eq(user.id))
        .count()
        .get_result(&mut conn)
    {
        Ok(n) => n,
        Err(e) => {
            tracing::error!("Failed to count saved recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load profile".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipes_uploaded_count: i64 = match recipes::table
        .filter(recipes::created_by.eq(user.id))
        .count()
        .get_result(&mut conn)
    {
        Ok(n) => n,
        Err(e) => {
            tracing::error!("Failed to count uploaded recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load profile".to_string(),
                }),
            )
                .into_response();
        }
    };

    let items_in_fridge_count: i64 = match fridge_items::table
        .filter(fridge_items::user_id.eq(user.id))
        .count()
        .get_result(&mut conn)
    {
        Ok(n) => n,
        Err(e) => {
            tracing::error!("Failed to count fridge items: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load profile".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(ProfileResponse {
            user: Some(user.into()),
            saved_recipes_count: Some(saved_recipes_count),
            recipes_uploaded_count: Some(recipes_uploaded_count),
            items_in_fridge_count: Some(items_in_fridge_count),
        }),
    )
        .into_response()
}

#[derive(OpenApi)]
#[openapi(paths(profile), components(schemas(ProfileResponse)))]
pub struct ApiDoc;
