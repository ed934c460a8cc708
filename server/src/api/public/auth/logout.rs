use crate::api::ErrorResponse;
use crate::auth::{clear_session_cookie, delete_session, SESSION_COOKIE};
use crate::db::DbPool;
use crate::get_conn;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub success: bool,
    pub redirect_to: String,
}

/// Deletes the session behind the cookie and clears the cookie. Safe to
/// call without a session.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session ended", body = LogoutResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn logout(State(pool): State<Arc<DbPool>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let token = cookie.value().to_string();
        let mut conn = get_conn!(pool);
        if let Err(e) = delete_session(&mut conn, &token) {
            tracing::error!("Failed to delete session: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to log out".to_string(),
                }),
            )
                .into_response();
        }
    }

    let jar = jar.add(clear_session_cookie());

    (
        StatusCode::OK,
        jar,
        Json(LogoutResponse {
            success: true,
            redirect_to: "/auth".to_string(),
        }),
    )
        .into_response()
}
