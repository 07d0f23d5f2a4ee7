pub mod delete_me;
pub mod me;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/users endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me::read_me).delete(delete_me::delete_me))
}

#[derive(OpenApi)]
#[openapi(
    paths(me::read_me, delete_me::delete_me),
    components(schemas(me::UserResponse))
)]
pub struct ApiDoc;
