//! Membership list service
//!
//! One implementation covers both cart and favourites; `ListKind` selects
//! the column, the error wording, and whether add verifies the book exists
//! first (favourites does, cart does not).
//!
//! Mutation is read-modify-write on the account row with no transaction:
//! concurrent writers to the same account's list race last-write-wins. A
//! successful add retried yields the "already" error, surfacing the
//! caller's stale view.

use crate::error::ApiError;
use crate::repositories::{AccountRepository, BookRepository};
use bookstore_shared::models::ListKind;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

fn already_in_message(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Cart => "Book is already in cart",
        ListKind::Favourites => "Book already in favourites",
    }
}

fn not_in_message(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Cart => "Book is not in cart",
        ListKind::Favourites => "Book is not in favourites",
    }
}

/// Membership list service for cart and favourites operations
pub struct ListService;

impl ListService {
    /// Add a book id to the caller's list
    ///
    /// Returns the updated list. Duplicate insertion is an error, not a
    /// silent no-op.
    pub async fn add(
        pool: &PgPool,
        account_id: Uuid,
        book_id: Uuid,
        kind: ListKind,
    ) -> Result<Vec<Uuid>, ApiError> {
        if kind.checks_book_exists() {
            let exists = BookRepository::exists(pool, book_id)
                .await
                .map_err(ApiError::Internal)?;
            if !exists {
                return Err(ApiError::NotFound("Book not found".to_string()));
            }
        }

        let account = AccountRepository::find_by_id(pool, account_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let mut list = account.list(kind).to_vec();
        if list.contains(&book_id) {
            return Err(ApiError::AlreadyPresent(already_in_message(kind).to_string()));
        }

        list.push(book_id);
        AccountRepository::set_list(pool, account_id, kind, &list)
            .await
            .map_err(ApiError::Internal)?;

        debug!(account_id = %account_id, book_id = %book_id, list = %kind, "added to list");

        Ok(list)
    }

    /// Remove a book id from the caller's list
    ///
    /// Absence is an error; the caller's view of the list was stale.
    pub async fn remove(
        pool: &PgPool,
        account_id: Uuid,
        book_id: Uuid,
        kind: ListKind,
    ) -> Result<Vec<Uuid>, ApiError> {
        let account = AccountRepository::find_by_id(pool, account_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let mut list = account.list(kind).to_vec();
        if !list.contains(&book_id) {
            return Err(ApiError::NotPresent(not_in_message(kind).to_string()));
        }

        list.retain(|id| *id != book_id);
        AccountRepository::set_list(pool, account_id, kind, &list)
            .await
            .map_err(ApiError::Internal)?;

        debug!(account_id = %account_id, book_id = %book_id, list = %kind, "removed from list");

        Ok(list)
    }
}
