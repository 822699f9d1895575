//! Database test fixtures.
//!
//! Tests run against an in-memory SQLite database. In-memory SQLite is
//! per-connection, so the pool is capped at one connection to keep every
//! statement on the same database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use libchat_admin::auth::sessions::SessionStore;
use libchat_admin::server::config::ensure_schema;
use libchat_admin::server::state::AppState;

/// Create an in-memory test database with the schema applied
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to create in-memory database");

    ensure_schema(&pool)
        .await
        .expect("failed to apply schema");

    pool
}

/// Build application state over a pool, with a long session lifetime
pub fn test_state(pool: SqlitePool) -> AppState {
    test_state_with_ttl(pool, 3600)
}

/// Build application state with an explicit session lifetime
pub fn test_state_with_ttl(pool: SqlitePool, session_ttl_secs: u64) -> AppState {
    AppState {
        db: pool,
        sessions: SessionStore::new(session_ttl_secs),
    }
}
