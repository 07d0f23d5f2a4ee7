use std::sync::Arc;

use axum::extract::FromRef;
use pantry_core::Scraper;

use crate::db::DbPool;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub scraper: Arc<Scraper>,
}

impl FromRef<AppState> for Arc<DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Scraper> {
    fn from_ref(state: &AppState) -> Self {
        state.scraper.clone()
    }
}
