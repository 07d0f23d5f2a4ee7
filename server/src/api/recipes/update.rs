use crate::api::extract::ApiJson;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{
    ingredient_groups_json, nutrients_json, string_list_json, Recipe, RecipeChangeset,
};
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use pantry_core::IngredientGroup;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::types::{validate_lengths, RecipeResponse};

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub ingredient_groups: Option<Vec<IngredientGroup>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub nutrients: Option<BTreeMap<String, String>>,
}

impl UpdateRecipeRequest {
    fn into_changeset(self) -> RecipeChangeset {
        RecipeChangeset {
            title: self.title,
            url: self.url,
            image: self.image,
            site_name: self.site_name,
            ingredients: self.ingredients.as_deref().map(string_list_json),
            ingredient_groups: self
                .ingredient_groups
                .as_deref()
                .map(ingredient_groups_json),
            instructions: self.instructions.as_deref().map(string_list_json),
            nutrients: self.nutrients.as_ref().map(nutrients_json),
            updated_at: Some(Utc::now()),
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateRecipeRequest>,
) -> impl IntoResponse {
    if let Err(detail) = validate_lengths(
        request.title.as_deref(),
        request.url.as_deref(),
        request.image.as_deref(),
        request.site_name.as_deref(),
    ) {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { detail })).into_response();
    }

    let mut conn = get_conn!(pool);

    let changeset = request.into_changeset();
    let recipe: Recipe = match diesel::update(
        recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::owner_id.eq(user.id)),
    )
    .set(&changeset)
    .returning(Recipe::as_returning())
    .get_result(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to update recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response()
}
