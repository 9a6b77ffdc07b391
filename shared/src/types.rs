//! API request and response types

use crate::models::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signup request
///
/// `role` is accepted as a raw string so that an unknown value surfaces as a
/// field validation error rather than a body deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Signin request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Address update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAddressRequest {
    pub address: String,
}

/// Compact account view returned by signup/signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Signup/signin response: a fresh bearer token plus the account summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: AccountSummary,
}

/// Full public account view — everything except the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    pub cart: Vec<Uuid>,
    pub favourites: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for account mutations that return the updated account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub message: String,
    pub user: AccountView,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// New book submission — all fields required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBookRequest {
    pub url: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub language: String,
}

/// Partial book update — absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Public book record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookView {
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

/// Response for a newly created book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreatedResponse {
    pub message: String,
    #[serde(rename = "bookId")]
    pub book_id: Uuid,
}

/// Response carrying a full book record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub message: String,
    pub book: BookView,
}

/// Catalog listing, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<BookView>,
}

/// Cart mutation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: Vec<Uuid>,
}

/// Favourites mutation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavouritesResponse {
    pub message: String,
    pub favourites: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_role_is_optional() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"username":"testuser","email":"test@example.com","password":"password123","address":"123 Test Street"}"#,
        )
        .unwrap();
        assert!(req.role.is_none());
    }

    #[test]
    fn test_update_book_request_accepts_partial_body() {
        let req: UpdateBookRequest = serde_json::from_str(r#"{"price":9.99}"#).unwrap();
        assert_eq!(req.price, Some(9.99));
        assert!(req.title.is_none());
    }

    #[test]
    fn test_book_created_response_uses_book_id_key() {
        let resp = BookCreatedResponse {
            message: "Book added successfully".to_string(),
            book_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("bookId").is_some());
    }

    #[test]
    fn test_account_view_never_carries_a_password_field() {
        let view = AccountView {
            id: Uuid::nil(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            address: "123 Test Street".to_string(),
            role: Role::User,
            cart: vec![],
            favourites: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
