//! Book model and database operations.
//!
//! The `timestamp` column records when the book row was created, as a
//! `YYYY-MM-DD HH:MM:SS` UTC string; updates leave it untouched.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;

/// One library book record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub location: String,
    pub availability: String,
    pub timestamp: String,
}

/// List all books, oldest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, subject, location, availability, timestamp
        FROM books
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Insert a new book, stamping the creation time server-side
pub async fn insert(
    pool: &SqlitePool,
    title: &str,
    subject: &str,
    location: &str,
    availability: &str,
) -> Result<Book, AppError> {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let book = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, subject, location, availability, timestamp)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, title, subject, location, availability, timestamp
        "#,
    )
    .bind(title)
    .bind(subject)
    .bind(location)
    .bind(availability)
    .bind(timestamp)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// Update a book by id, returns `false` if the id does not exist
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    subject: &str,
    location: &str,
    availability: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE books
        SET title = ?1, subject = ?2, location = ?3, availability = ?4
        WHERE id = ?5
        "#,
    )
    .bind(title)
    .bind(subject)
    .bind(location)
    .bind(availability)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a book by id, returns `false` if the id does not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        DELETE FROM books
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
