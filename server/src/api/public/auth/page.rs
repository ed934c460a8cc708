use crate::auth::MaybeAuthUser;
use axum::response::{IntoResponse, Redirect};
use axum::Json;

/// The auth page itself has nothing to load; a visitor who already holds a
/// valid session is bounced straight into the app.
#[utoipa::path(
    get,
    path = "/auth",
    tag = "auth",
    responses(
        (status = 200, description = "Show the login/registration page"),
        (status = 303, description = "Already authenticated, redirected to /app")
    )
)]
pub async fn auth_page(MaybeAuthUser(user): MaybeAuthUser) -> impl IntoResponse {
    if user.is_some() {
        return Redirect::to("/app").into_response();
    }

    Json(serde_json::json!({})).into_response()
}
