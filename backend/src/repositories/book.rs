//! Book repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Book record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookRecord {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub url: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub language: String,
}

/// Input for a partial book update
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookFields {
    pub url: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub language: Option<String>,
}

/// Book repository for database operations
pub struct BookRepository;

impl BookRepository {
    /// Create a new book
    pub async fn create(pool: &PgPool, book: &NewBook) -> Result<BookRecord> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            INSERT INTO books (url, title, author, price, description, language)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, url, title, author, price, description, language, created_at, updated_at
            "#,
        )
        .bind(&book.url)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.price)
        .bind(&book.description)
        .bind(&book.language)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find book by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, url, title, author, price, description, language, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Check if a book exists
    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// List all books, most recently created first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, url, title, author, price, description, language, created_at, updated_at
            FROM books
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Apply a partial update
    ///
    /// Returns None when the book does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateBookFields,
    ) -> Result<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            UPDATE books SET
                url = COALESCE($2, url),
                title = COALESCE($3, title),
                author = COALESCE($4, author),
                price = COALESCE($5, price),
                description = COALESCE($6, description),
                language = COALESCE($7, language),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, url, title, author, price, description, language, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(updates.url)
        .bind(updates.title)
        .bind(updates.author)
        .bind(updates.price)
        .bind(updates.description)
        .bind(updates.language)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a book
    ///
    /// Returns false when no row matched. Does not touch cart/favourites
    /// references held by accounts; list readers tolerate dangling ids.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM books WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
