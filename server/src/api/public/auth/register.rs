use crate::api::ErrorResponse;
use crate::auth::{create_session, generate_session_token, hash_password, session_cookie};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewUser, User};
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use axum_extra::extract::CookieJar;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::{validate_email, validate_name, validate_password, AuthSuccess};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
    /// Falls back to the email when absent or blank.
    #[serde(default)]
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Account created", body = AuthSuccess),
        (status = 400, description = "Malformed form fields or email already registered", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(pool): State<Arc<DbPool>>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
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

    if form.password != form.password_confirm {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Passwords do not match".to_string(),
            }),
        )
            .into_response();
    }

    let name = match form.name {
        Some(n) if !n.is_empty() => n,
        _ => form.email.clone(),
    };

    if !validate_name(&name) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please provide a valid name".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let already_registered: bool = match diesel::select(diesel::dsl::exists(
        users::table.filter(users::email.eq(&form.email)),
    ))
    .get_result(&mut conn)
    {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to check for existing account: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "An error has occurred".to_string(),
                }),
            )
                .into_response();
        }
    };

    if already_registered {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "An account with this email already exists".to_string(),
            }),
        )
            .into_response();
    }

    let password_hash = match hash_password(&form.password) {
        Ok(h) => h,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to hash password".to_string(),
                }),
            )
                .into_response()
        }
    };

    let new_user = NewUser {
        email: &form.email,
        name: &name,
        password_hash: &password_hash,
    };

    let user: User = match diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(&mut conn)
    {
        Ok(u) => u,
        // Lost a race against a concurrent registration for the same email
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "An account with this email already exists".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "An error has occurred".to_string(),
                }),
            )
                .into_response();
        }
    };

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
            message: format!("Welcome to The Fridge, {}! Your account has been created.", name),
            redirect_to: "/app".to_string(),
        }),
    )
        .into_response()
}
