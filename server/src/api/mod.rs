pub mod home;
pub mod profile;
pub mod public;
pub mod recipes;

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

use crate::views::{IngredientPortion, IngredientView, RecipeView, RecipeWithIngredients, UserView};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(
        ErrorResponse,
        UserView,
        IngredientView,
        IngredientPortion,
        RecipeView,
        RecipeWithIngredients,
    )))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Auth is a session cookie, not a bearer token
    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(crate::auth::SESSION_COOKIE))),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        home::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        profile::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

/// Serve the merged OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(openapi())
}
