use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::models::User;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;
use std::sync::Arc;

use super::cookie::SESSION_COOKIE;
use super::db::get_user_from_token;

/// Extractor for handlers that refuse anonymous requests.
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> impl IntoResponse {
///     // user is the authenticated User
/// }
/// ```
pub struct AuthUser(pub User);

/// Extractor for pages that degrade gracefully without a session.
pub struct MaybeAuthUser(pub Option<User>);

pub enum AuthError {
    MissingSession,
    InvalidSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingSession => "Missing session cookie",
            AuthError::InvalidSession => "Invalid or expired session",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

async fn user_from_parts<S>(parts: &mut Parts, state: &S) -> Result<User, AuthError>
where
    S: Send + Sync,
    Arc<DbPool>: FromRef<S>,
{
    let pool = Arc::<DbPool>::from_ref(state);

    // CookieJar extraction is infallible
    let jar = match CookieJar::from_request_parts(parts, state).await {
        Ok(jar) => jar,
        Err(never) => match never {},
    };

    let token = jar
        .get(SESSION_COOKIE)
        .ok_or(AuthError::MissingSession)?
        .value()
        .to_string();

    get_user_from_token(&pool, &token)
        .await
        .ok_or(AuthError::InvalidSession)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<DbPool>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        user_from_parts(parts, state).await.map(AuthUser)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<DbPool>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(user_from_parts(parts, state).await.ok()))
    }
}
