pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod scrape;
pub mod types;
pub mod update;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/recipes endpoints (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/scrape", post(scrape::scrape_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

/// The older scrape path, kept for existing clients. Same handler, same
/// authentication.
pub fn legacy_router() -> Router<AppState> {
    Router::new().route(
        "/recipe_scraper/parse_recipe/",
        post(scrape::scrape_recipe_legacy),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        scrape::scrape_recipe,
        scrape::scrape_recipe_legacy,
    ),
    components(schemas(
        types::RecipeResponse,
        types::RecipeInput,
        list::RecipesResponse,
        update::UpdateRecipeRequest,
        pantry_core::ParsedRecipe,
        pantry_core::IngredientGroup,
    ))
)]
pub struct ApiDoc;
