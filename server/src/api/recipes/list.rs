use crate::api::extract::ApiQuery;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use super::types::RecipeResponse;

/// Largest page a single request may ask for.
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// Number of items to skip (default: 0)
    pub skip: Option<i64>,
    /// Number of items to return (default and max: 100)
    pub limit: Option<i64>,
}

impl ListRecipesParams {
    fn page(&self) -> (i64, i64) {
        let skip = self.skip.unwrap_or(0).max(0);
        let limit = self.limit.unwrap_or(MAX_LIMIT).clamp(0, MAX_LIMIT);
        (skip, limit)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipesResponse {
    pub data: Vec<RecipeResponse>,
    /// Total recipes owned by the caller, regardless of paging
    pub count: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "The caller's recipes, newest first", body = RecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Invalid paging parameters", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    ApiQuery(params): ApiQuery<ListRecipesParams>,
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let (skip, limit) = params.page();
    let mut conn = get_conn!(pool);

    let count: i64 = match recipes::table
        .filter(recipes::owner_id.eq(user.id))
        .count()
        .get_result(&mut conn)
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to count recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let rows: Vec<Recipe> = match recipes::table
        .filter(recipes::owner_id.eq(user.id))
        .order((recipes::created_at.desc(), recipes::id.desc()))
        .offset(skip)
        .limit(limit)
        .select(Recipe::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(RecipesResponse {
            data: rows.into_iter().map(RecipeResponse::from).collect(),
            count,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_caps() {
        assert_eq!(ListRecipesParams::default().page(), (0, 100));

        let params = ListRecipesParams {
            skip: Some(-5),
            limit: Some(500),
        };
        assert_eq!(params.page(), (0, 100));

        let params = ListRecipesParams {
            skip: Some(20),
            limit: Some(10),
        };
        assert_eq!(params.page(), (20, 10));
    }
}
