use crate::api::extract::ApiQuery;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::scraping;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::{ParsedRecipe, Scraper};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScrapeParams {
    /// Page to scrape
    pub url: String,
    /// Also store the result as a recipe owned by the caller (default: false)
    #[serde(default)]
    pub save: bool,
}

/// Query parameters are extracted before the caller is authenticated, so a
/// bad request is rejected without a session lookup.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/scrape",
    tag = "scrape",
    params(ScrapeParams),
    responses(
        (status = 200, description = "Recipe data found on the page", body = ParsedRecipe),
        (status = 400, description = "Host not in SCRAPE_ALLOWED_HOSTS", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Missing or invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Unusable URL, transport failure, or save failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn scrape_recipe(
    ApiQuery(params): ApiQuery<ScrapeParams>,
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    State(scraper): State<Arc<Scraper>>,
) -> impl IntoResponse {
    if let Err(e) = scraping::is_host_allowed(&params.url) {
        tracing::warn!(url = %params.url, error = %e, "scrape rejected");
        return e.into_response();
    }

    let parsed = match scraper.scrape(&params.url).await {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(url = %params.url, error = %e, "scrape failed");
            return scraping::fetch_error_response(&e);
        }
    };

    if params.save {
        let mut conn = get_conn!(pool);
        if let Err(e) = scraping::save_parsed_recipe(&mut conn, &parsed, &params.url, user.id) {
            tracing::error!(url = %params.url, "Failed to save recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Failed to save recipe".to_string(),
                }),
            )
                .into_response();
        }
    }

    (StatusCode::OK, Json(parsed)).into_response()
}

/// Older path for [`scrape_recipe`]; identical contract.
#[utoipa::path(
    post,
    path = "/api/v1/recipe_scraper/parse_recipe/",
    tag = "scrape",
    params(ScrapeParams),
    responses(
        (status = 200, description = "Recipe data found on the page", body = ParsedRecipe),
        (status = 400, description = "Host not in SCRAPE_ALLOWED_HOSTS", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Missing or invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Unusable URL, transport failure, or save failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn scrape_recipe_legacy(
    query: ApiQuery<ScrapeParams>,
    user: AuthUser,
    pool: State<Arc<DbPool>>,
    scraper: State<Arc<Scraper>>,
) -> impl IntoResponse {
    scrape_recipe(query, user, pool, scraper).await
}
