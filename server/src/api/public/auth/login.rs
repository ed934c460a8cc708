use crate::api::ErrorResponse;
use crate::auth::{create_session, generate_session_token, session_cookie, verify_password};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use axum_extra::extract::CookieJar;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::{validate_email, validate_password, AuthSuccess};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = AuthSuccess),
        (status = 400, description = "Malformed form fields or bad credentials", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(pool): State<Arc<DbPool>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    if !validate_email(&form.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid email format".to_string(),
            }),
        )
            .into_response();
    }

    if !validate_password(&form.password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid password (min 6, max 255 characters)".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let user: User = match users::table
        .filter(users::email.eq(&form.email))
        .select(User::as_select())
        .first(&mut conn)
    {
        Ok(u) => u,
        // An unknown email reads exactly like a wrong password
        Err(diesel::result::Error::NotFound) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Incorrect email or password".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to look up user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "An error has occurred".to_string(),
                }),
            )
                .into_response();
        }
    };

    if !verify_password(&form.password, &user.password_hash) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Incorrect email or password".to_string(),
            }),
        )
            .into_response();
    }

    let token = generate_session_token();
    let session = match create_session(&mut conn, &token, user.id) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create session".to_string(),
                }),
            )
                .into_response();
        }
    };

    let jar = jar.add(session_cookie(token, session.expires_at));

    (
        StatusCode::OK,
        jar,
        Json(AuthSuccess {
            success: true,
            message: "Login successful! Redirecting...".to_string(),
            redirect_to: "/app".to_string(),
        }),
    )
        .into_response()
}
