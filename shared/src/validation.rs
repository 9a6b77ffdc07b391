//! Input validation functions
//!
//! Per-field validators used by the backend services. Each returns the
//! message for the first rule the value breaks; callers stop at the first
//! failing field.

use validator::ValidateEmail;

/// Validate a signup username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 4 {
        return Err("Username must be at least 4 characters".to_string());
    }
    Ok(())
}

/// Validate email syntax
pub fn validate_email(email: &str) -> Result<(), String> {
    if !email.validate_email() {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 5 {
        return Err("Password must be at least 5 characters".to_string());
    }
    Ok(())
}

/// Validate a postal address
pub fn validate_address(address: &str) -> Result<(), String> {
    if address.len() < 3 {
        return Err("Address must be at least 3 characters".to_string());
    }
    Ok(())
}

/// Validate a book cover image URL
pub fn validate_book_url(url: &str) -> Result<(), String> {
    if url::Url::parse(url).is_err() {
        return Err("Invalid image URL".to_string());
    }
    Ok(())
}

/// Validate a book title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    Ok(())
}

/// Validate a book author
pub fn validate_author(author: &str) -> Result<(), String> {
    if author.is_empty() {
        return Err("Author is required".to_string());
    }
    Ok(())
}

/// Validate a book price
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be non-negative".to_string());
    }
    Ok(())
}

/// Validate a book description
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.len() < 5 {
        return Err("Description must be at least 5 characters".to_string());
    }
    Ok(())
}

/// Validate a book language
pub fn validate_language(language: &str) -> Result<(), String> {
    if language.is_empty() {
        return Err("Language is required".to_string());
    }
    Ok(())
}
