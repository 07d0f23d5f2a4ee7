pub mod extract;
pub mod public;
pub mod recipes;
pub mod users;

use crate::state::AppState;
use axum::Router;
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Prefix every versioned endpoint is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// All API routes, mounted under [`API_PREFIX`].
pub fn router() -> Router<AppState> {
    let v1 = Router::new()
        .merge(public::router())
        .nest("/users", users::router())
        .nest("/recipes", recipes::router())
        .merge(recipes::legacy_router());

    Router::new().nest(API_PREFIX, v1)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(
        info(title = "pantry", description = "Recipe API with URL scraping"),
        components(schemas(ErrorResponse, MessageResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Add security scheme
    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        users::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_scrape_endpoints() {
        let spec = openapi();
        assert!(spec.paths.paths.contains_key("/api/v1/recipes/scrape"));
        assert!(spec
            .paths
            .paths
            .contains_key("/api/v1/recipe_scraper/parse_recipe/"));
        assert!(spec.paths.paths.contains_key("/api/v1/auth/signup"));

        let components = spec.components.unwrap();
        assert!(components.schemas.contains_key("ParsedRecipe"));
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
