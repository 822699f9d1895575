/**
 * Server Initialization
 *
 * Builds the Axum application: connect to the store, apply the schema,
 * assemble state and routes, and start the session sweep task.
 *
 * # Initialization Process
 *
 * 1. Create the SQLite pool (file created on first run) and apply the
 *    schema
 * 2. Create the in-memory session store
 * 3. Build the router with shared state
 * 4. Spawn a periodic task evicting expired sessions
 */
use axum::Router;

use crate::auth::sessions::SessionStore;
use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// How often the expired-session sweep runs
const SESSION_SWEEP_INTERVAL_SECS: u64 = 300;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing libchat-admin server");

    let db = load_database(config).await?;
    let sessions = SessionStore::new(config.session_ttl_secs);
    let state = AppState {
        db,
        sessions: sessions.clone(),
    };

    let app = create_router(state);

    // Expiry is also checked on every read; the sweep only reclaims
    // memory for sessions nobody comes back to.
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let swept = sessions.sweep_expired();
            if swept > 0 {
                tracing::debug!(swept, "expired sessions removed");
            }
        }
    });

    tracing::info!("router configured");
    Ok(app)
}
