use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Difficulty, NewRecipe, NewRecipeIngredient, Recipe};
use crate::schema::{recipe_ingredients, recipes};
use crate::views::RecipeView;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub difficulty: String,
    /// JSON-encoded array of ingredient entries.
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// One ingredient reference submitted with the create form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientEntry {
    pub id: Uuid,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub success: bool,
    pub recipe: RecipeView,
}

/// Integer form fields keep the legacy truthiness rule: absent,
/// unparseable, and a literal zero all count as missing.
fn parse_nonzero_int(value: &str) -> Option<i32> {
    match value.trim().parse::<i32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

#[utoipa::path(
    post,
    path = "/app/recipes/create",
    tag = "recipes",
    request_body(content = CreateRecipeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Recipe created", body = CreateRecipeResponse),
        (status = 400, description = "Invalid form fields", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Form(form): Form<CreateRecipeForm>,
) -> impl IntoResponse {
    if form.name.is_empty() || form.instructions.is_empty() || form.difficulty.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".to_string(),
            }),
        )
            .into_response();
    }

    let (Some(servings), Some(prep_time), Some(cook_time)) = (
        parse_nonzero_int(&form.servings),
        parse_nonzero_int(&form.prep_time),
        parse_nonzero_int(&form.cook_time),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".to_string(),
            }),
        )
            .into_response();
    };

    let Some(difficulty) = Difficulty::parse(&form.difficulty) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid difficulty".to_string(),
            }),
        )
            .into_response();
    };

    // JSON null and an absent field both mean "no ingredients"
    let entries: Vec<IngredientEntry> = match form.ingredients.as_deref() {
        None => Vec::new(),
        Some(raw) => match serde_json::from_str::<Option<Vec<IngredientEntry>>>(raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid ingredients format".to_string(),
                    }),
                )
                    .into_response()
            }
        },
    };

    let mut conn = get_conn!(pool);

    // One transaction for the recipe and its join rows, so a failed
    // ingredient insert cannot leave an ingredient-less recipe behind
    let result: Result<Recipe, diesel::result::Error> = conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            name: &form.name,
            description: form.description.as_deref(),
            instructions: Some(&form.instructions),
            servings,
            prep_time,
            cook_time,
            images: None,
            difficulty: difficulty.as_str(),
            created_by: user.id,
        };

        let recipe: Recipe = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        let rows: Vec<NewRecipeIngredient> = entries
            .iter()
            .map(|entry| NewRecipeIngredient {
                recipe_id: recipe.id,
                ingredient_id: entry.id,
                amount: entry.amount.as_deref(),
                unit: entry.unit.as_deref(),
            })
            .collect();

        if !rows.is_empty() {
            diesel::insert_into(recipe_ingredients::table)
                .values(&rows)
                .execute(conn)?;
        }

        Ok(recipe)
    });

    match result {
        Ok(recipe) => (
            StatusCode::OK,
            Json(CreateRecipeResponse {
                success: true,
                recipe: recipe.into(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordinary_integers() {
        assert_eq!(parse_nonzero_int("4"), Some(4));
        assert_eq!(parse_nonzero_int(" 15 "), Some(15));
    }

    #[test]
    fn zero_counts_as_missing() {
        assert_eq!(parse_nonzero_int("0"), None);
    }

    #[test]
    fn garbage_counts_as_missing() {
        assert_eq!(parse_nonzero_int(""), None);
        assert_eq!(parse_nonzero_int("abc"), None);
        assert_eq!(parse_nonzero_int("2.5"), None);
    }

    #[test]
    fn negative_values_pass_the_truthiness_rule() {
        assert_eq!(parse_nonzero_int("-3"), Some(-3));
    }

    #[test]
    fn ingredients_field_accepts_empty_array_and_null() {
        let empty: Option<Vec<IngredientEntry>> = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.unwrap().len(), 0);

        let null: Option<Vec<IngredientEntry>> = serde_json::from_str("null").unwrap();
        assert!(null.is_none());
    }

    #[test]
    fn ingredients_field_parses_entries() {
        let raw = format!(
            r#"[{{"id": "{}", "amount": "2", "unit": "tbsp"}}, {{"id": "{}"}}]"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let parsed: Option<Vec<IngredientEntry>> = serde_json::from_str(&raw).unwrap();
        let parsed = parsed.unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].amount.as_deref(), Some("2"));
        assert_eq!(parsed[1].amount, None);
    }

    #[test]
    fn ingredients_field_rejects_malformed_json() {
        assert!(serde_json::from_str::<Option<Vec<IngredientEntry>>>("not json").is_err());
        assert!(serde_json::from_str::<Option<Vec<IngredientEntry>>>("").is_err());
    }
}
