/**
 * Intent Model and Database Operations
 *
 * A chatbot intent is one row: a tag naming the intent plus the raw
 * pattern and response text blobs the bot trainer consumes. Each
 * operation below is a single parameterized statement.
 */
use sqlx::SqlitePool;

use crate::error::AppError;

/// One chatbot intent record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Intent {
    pub id: i64,
    pub tag: String,
    pub patterns: String,
    pub responses: String,
}

/// List all intents, oldest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Intent>, AppError> {
    let intents = sqlx::query_as::<_, Intent>(
        r#"
        SELECT id, tag, patterns, responses
        FROM intents
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(intents)
}

/// Insert a new intent
pub async fn insert(
    pool: &SqlitePool,
    tag: &str,
    patterns: &str,
    responses: &str,
) -> Result<Intent, AppError> {
    let intent = sqlx::query_as::<_, Intent>(
        r#"
        INSERT INTO intents (tag, patterns, responses)
        VALUES (?1, ?2, ?3)
        RETURNING id, tag, patterns, responses
        "#,
    )
    .bind(tag)
    .bind(patterns)
    .bind(responses)
    .fetch_one(pool)
    .await?;

    Ok(intent)
}

/// Update an intent by id
///
/// Returns `false` if the id does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    tag: &str,
    patterns: &str,
    responses: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE intents
        SET tag = ?1, patterns = ?2, responses = ?3
        WHERE id = ?4
        "#,
    )
    .bind(tag)
    .bind(patterns)
    .bind(responses)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an intent by id
///
/// Returns `false` if the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        DELETE FROM intents
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
