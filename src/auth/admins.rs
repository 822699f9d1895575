/**
 * Admin Credential Records
 *
 * Database operations for the `admins` table. Exactly one record exists
 * per login email; the `password` column holds either a bcrypt hash or a
 * legacy plaintext value (see `auth::credentials`).
 */
use sqlx::SqlitePool;

use crate::error::AppError;

/// Stored identity record used to authenticate an administrator
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminCredential {
    /// Unique admin identifier
    pub id: i64,
    /// Login email (unique)
    pub email: String,
    /// Stored credential: bcrypt hash or legacy plaintext
    pub password: String,
}

/// Get an admin credential by email
///
/// Returns `None` if no admin uses this email.
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<AdminCredential>, AppError> {
    let admin = sqlx::query_as::<_, AdminCredential>(
        r#"
        SELECT id, email, password
        FROM admins
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// Create a new admin credential
pub async fn insert(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<AdminCredential, AppError> {
    let admin = sqlx::query_as::<_, AdminCredential>(
        r#"
        INSERT INTO admins (email, password)
        VALUES (?1, ?2)
        RETURNING id, email, password
        "#,
    )
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await?;

    Ok(admin)
}

/// Create or replace the credential for an email
///
/// Single-row upsert keyed by the unique email; calling it again with the
/// same arguments is a no-op.
pub async fn upsert(pool: &SqlitePool, email: &str, password: &str) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO admins (email, password)
        VALUES (?1, ?2)
        ON CONFLICT(email) DO UPDATE SET password = excluded.password
        "#,
    )
    .bind(email)
    .bind(password)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace the stored credential for an email
///
/// Returns `false` if no admin uses this email.
pub async fn update_password(
    pool: &SqlitePool,
    email: &str,
    new_password: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE admins
        SET password = ?1
        WHERE email = ?2
        "#,
    )
    .bind(new_password)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
