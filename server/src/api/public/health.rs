use axum::{response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/api/v1/utils/health-check",
    tag = "utils",
    responses(
        (status = 200, description = "Server is up", body = bool)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(true)
}
