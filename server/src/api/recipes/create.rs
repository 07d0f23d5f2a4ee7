use crate::api::extract::ApiJson;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{
    ingredient_groups_json, nutrients_json, string_list_json, NewRecipe, Recipe,
};
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

use super::types::{validate_lengths, RecipeInput, RecipeResponse};

impl NewRecipe {
    pub fn from_input(input: RecipeInput, owner_id: uuid::Uuid) -> Self {
        Self {
            owner_id,
            title: input.title,
            url: input.url,
            image: input.image,
            site_name: input.site_name,
            ingredients: input.ingredients.as_deref().map(string_list_json),
            ingredient_groups: input
                .ingredient_groups
                .as_deref()
                .and_then(ingredient_groups_json),
            instructions: input.instructions.as_deref().map(string_list_json),
            nutrients: input.nutrients.as_ref().map(nutrients_json),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    ApiJson(input): ApiJson<RecipeInput>,
) -> impl IntoResponse {
    if let Err(detail) = validate_lengths(
        Some(&input.title),
        input.url.as_deref(),
        input.image.as_deref(),
        input.site_name.as_deref(),
    ) {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { detail })).into_response();
    }

    let mut conn = get_conn!(pool);

    let new_recipe = NewRecipe::from_input(input, user.id);
    let recipe: Recipe = match diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to create recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::IngredientGroup;

    #[test]
    fn test_from_input_stores_plain_json() {
        let owner = uuid::Uuid::new_v4();
        let input = RecipeInput {
            title: "Soup".to_string(),
            ingredients: Some(vec!["water".to_string()]),
            ingredient_groups: Some(vec![]),
            instructions: Some(vec!["Boil".to_string()]),
            ..Default::default()
        };

        let record = NewRecipe::from_input(input, owner);
        assert_eq!(record.owner_id, owner);
        assert_eq!(record.ingredients, Some(serde_json::json!(["water"])));
        assert_eq!(record.ingredient_groups, None);
        assert_eq!(record.instructions, Some(serde_json::json!(["Boil"])));
        assert_eq!(record.nutrients, None);

        let grouped = NewRecipe::from_input(
            RecipeInput {
                title: "Pie".to_string(),
                ingredient_groups: Some(vec![IngredientGroup {
                    purpose: Some("Crust".to_string()),
                    ingredients: vec!["flour".to_string()],
                }]),
                ..Default::default()
            },
            owner,
        );
        assert_eq!(
            grouped.ingredient_groups,
            Some(serde_json::json!([{"purpose": "Crust", "ingredients": ["flour"]}]))
        );
    }
}
