//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod account;
pub mod book;

pub use account::{AccountRecord, AccountRepository};
pub use book::{BookRecord, BookRepository, NewBook, UpdateBookFields};
