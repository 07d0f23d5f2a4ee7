use crate::api::{ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/v1/users/me",
    tag = "users",
    responses(
        (status = 200, description = "User and everything they own deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_me(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Sessions and recipes go with the user (ON DELETE CASCADE)
    if let Err(e) = diesel::delete(users::table.find(user.id)).execute(&mut conn) {
        tracing::error!("Failed to delete user: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to delete user".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(user_id = %user.id, "user deleted");

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "User deleted successfully".to_string(),
        }),
    )
        .into_response()
}
