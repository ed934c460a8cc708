pub mod auth;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", get(auth::page::auth_page))
        .route("/auth/login", post(auth::login::login))
        .route("/auth/register", post(auth::register::register))
        .route("/auth/logout", post(auth::logout::logout))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::page::auth_page,
        auth::login::login,
        auth::register::register,
        auth::logout::logout,
    ),
    components(schemas(
        auth::AuthSuccess,
        auth::login::LoginForm,
        auth::register::RegisterForm,
        auth::logout::LogoutResponse,
    ))
)]
pub struct ApiDoc;
