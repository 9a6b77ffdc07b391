//! Catalog service for book management
//!
//! Mutations are admin-gated: the caller's account is loaded and its role
//! checked on every call. A missing caller account is answered with the same
//! 403 as an insufficient role.

use crate::error::ApiError;
use crate::repositories::{AccountRepository, BookRecord, BookRepository, NewBook, UpdateBookFields};
use bookstore_shared::types::{
    AddBookRequest, BookCreatedResponse, BookListResponse, BookResponse, BookView,
    MessageResponse, UpdateBookRequest,
};
use bookstore_shared::validation;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

fn book_view(record: &BookRecord) -> BookView {
    BookView {
        id: record.id,
        url: record.url.clone(),
        title: record.title.clone(),
        author: record.author.clone(),
        price: record.price,
        description: record.description.clone(),
        language: record.language.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

/// Fail with 403 unless the caller exists and is an admin
async fn ensure_admin(pool: &PgPool, caller_id: Uuid, denial: &str) -> Result<(), ApiError> {
    let caller = AccountRepository::find_by_id(pool, caller_id)
        .await
        .map_err(ApiError::Internal)?;

    match caller {
        Some(account) if account.is_admin() => Ok(()),
        _ => Err(ApiError::Forbidden(denial.to_string())),
    }
}

fn validate_new_book(req: &AddBookRequest) -> Result<(), ApiError> {
    validation::validate_book_url(&req.url).map_err(ApiError::Validation)?;
    validation::validate_title(&req.title).map_err(ApiError::Validation)?;
    validation::validate_author(&req.author).map_err(ApiError::Validation)?;
    validation::validate_price(req.price).map_err(ApiError::Validation)?;
    validation::validate_description(&req.description).map_err(ApiError::Validation)?;
    validation::validate_language(&req.language).map_err(ApiError::Validation)?;
    Ok(())
}

fn validate_book_updates(req: &UpdateBookRequest) -> Result<(), ApiError> {
    if let Some(url) = &req.url {
        validation::validate_book_url(url).map_err(ApiError::Validation)?;
    }
    if let Some(title) = &req.title {
        validation::validate_title(title).map_err(ApiError::Validation)?;
    }
    if let Some(author) = &req.author {
        validation::validate_author(author).map_err(ApiError::Validation)?;
    }
    if let Some(price) = req.price {
        validation::validate_price(price).map_err(ApiError::Validation)?;
    }
    if let Some(description) = &req.description {
        validation::validate_description(description).map_err(ApiError::Validation)?;
    }
    if let Some(language) = &req.language {
        validation::validate_language(language).map_err(ApiError::Validation)?;
    }
    Ok(())
}

/// Catalog service for book operations
pub struct CatalogService;

impl CatalogService {
    /// Add a book to the catalog (admin only)
    pub async fn add_book(
        pool: &PgPool,
        caller_id: Uuid,
        req: &AddBookRequest,
    ) -> Result<BookCreatedResponse, ApiError> {
        validate_new_book(req)?;
        ensure_admin(pool, caller_id, "Only admin can add books").await?;

        let book = BookRepository::create(
            pool,
            &NewBook {
                url: req.url.clone(),
                title: req.title.clone(),
                author: req.author.clone(),
                price: req.price,
                description: req.description.clone(),
                language: req.language.clone(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(book_id = %book.id, title = %book.title, "book added");

        Ok(BookCreatedResponse {
            message: "Book added successfully".to_string(),
            book_id: book.id,
        })
    }

    /// Apply a partial update to a book (admin only)
    pub async fn update_book(
        pool: &PgPool,
        caller_id: Uuid,
        book_id: Uuid,
        req: &UpdateBookRequest,
    ) -> Result<BookResponse, ApiError> {
        validate_book_updates(req)?;
        ensure_admin(pool, caller_id, "Only admin can update books").await?;

        let updates = UpdateBookFields {
            url: req.url.clone(),
            title: req.title.clone(),
            author: req.author.clone(),
            price: req.price,
            description: req.description.clone(),
            language: req.language.clone(),
        };

        let book = BookRepository::update(pool, book_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

        Ok(BookResponse {
            message: "Book updated successfully".to_string(),
            book: book_view(&book),
        })
    }

    /// Remove a book from the catalog (admin only)
    ///
    /// Cart/favourites entries referencing the book are left in place.
    pub async fn delete_book(
        pool: &PgPool,
        caller_id: Uuid,
        book_id: Uuid,
    ) -> Result<MessageResponse, ApiError> {
        ensure_admin(pool, caller_id, "Only admin can delete books").await?;

        let deleted = BookRepository::delete(pool, book_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Book not found".to_string()));
        }

        info!(book_id = %book_id, "book deleted");

        Ok(MessageResponse {
            message: "Book deleted successfully".to_string(),
        })
    }

    /// List the whole catalog, newest first. No authentication.
    pub async fn list_books(pool: &PgPool) -> Result<BookListResponse, ApiError> {
        let books = BookRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(BookListResponse {
            books: books.iter().map(book_view).collect(),
        })
    }
}
