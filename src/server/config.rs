/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment
 * and constructing the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables, with development
 * defaults so a bare `cargo run` works:
 *
 * - `DATABASE_URL` - sqlx SQLite URL (default `sqlite:libchat_admin.db`)
 * - `SERVER_PORT` - listen port (default 3000)
 * - `SESSION_TTL_SECS` - session lifetime (default 3600)
 * - `DB_ACQUIRE_TIMEOUT_SECS` - how long a request may wait for a store
 *   connection before failing with a generic notice (default 5)
 */
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx database URL
    pub database_url: String,
    /// HTTP listen port
    pub port: u16,
    /// Session lifetime in seconds
    pub session_ttl_secs: u64,
    /// Pool acquire timeout in seconds
    pub db_acquire_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:libchat_admin.db".to_string()),
            port: env_parse("SERVER_PORT", 3000),
            session_ttl_secs: env_parse("SESSION_TTL_SECS", 3600),
            db_acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", 5),
        }
    }
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Table definitions, applied at startup
///
/// Plain `CREATE TABLE IF NOT EXISTS` statements; there is no migration
/// tooling for two flat tables and one credential table.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS intents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tag TEXT NOT NULL,
        patterns TEXT NOT NULL,
        responses TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        subject TEXT NOT NULL,
        location TEXT NOT NULL,
        availability TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
];

/// Create the required tables if they do not exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Create the SQLite connection pool and apply the schema
///
/// The SQLite file is created on first run. The acquire timeout bounds
/// how long any single request waits for a connection; a timed-out
/// acquire surfaces as a store-unavailable notice, not a crash.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!(url = %config.database_url, "connecting to database");

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    tracing::info!("database ready");

    Ok(pool)
}
