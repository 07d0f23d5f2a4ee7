use crate::db::DbPool;
use crate::models::{NewSession, User};
use crate::schema::{sessions, users};
use chrono::{Duration, Utc};
use diesel::prelude::*;

use super::crypto::{generate_token, hash_token};

/// Sessions last this many days.
pub const SESSION_TTL_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to generate session token: {0}")]
    Token(#[from] rand::rand_core::OsError),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

/// Store a new session for `user_id` and return its raw token.
pub fn create_session(conn: &mut PgConnection, user_id: uuid::Uuid) -> Result<String, SessionError> {
    let token = generate_token()?;
    let token_hash = hash_token(&token);
    let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

    let new_session = NewSession {
        user_id,
        token_hash: &token_hash,
        expires_at,
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(token)
}

/// The active user owning an unexpired session for `token`.
pub async fn get_user_from_token(pool: &DbPool, token: &str) -> Option<User> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Database connection failed during auth: {}", e);
            return None;
        }
    };
    let token_hash = hash_token(token);

    sessions::table
        .inner_join(users::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now()))
        .filter(users::is_active.eq(true))
        .select(User::as_select())
        .first(&mut conn)
        .ok()
}
