//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer.

pub mod account;
pub mod catalog;
pub mod lists;

pub use account::AccountService;
pub use catalog::CatalogService;
pub use lists::ListService;
