/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheap clones over shared interiors: the sqlx pool is
 * internally reference-counted and `SessionStore` wraps an
 * `Arc<Mutex<..>>`. Beyond these two, the application keeps no
 * cross-request mutable state.
 */
use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Record/credential store connection pool
    pub db: SqlitePool,
    /// Server-side session store
    pub sessions: SessionStore,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
