//! Account service for signup, signin, and profile management
//!
//! Validation happens field by field; the response carries the first failing
//! field's reason. Signin failures are deliberately generic so callers
//! cannot probe which of email/password was wrong.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{AccountRecord, AccountRepository};
use bookstore_shared::models::Role;
use bookstore_shared::types::{
    AccountResponse, AccountSummary, AccountView, AuthResponse, SignupRequest,
};
use bookstore_shared::validation;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Build the public view of an account, everything except the hash
fn account_view(record: &AccountRecord) -> AccountView {
    AccountView {
        id: record.id,
        username: record.username.clone(),
        email: record.email.clone(),
        address: record.address.clone(),
        role: record.role.parse().unwrap_or_default(),
        cart: record.cart.clone(),
        favourites: record.favourites.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

fn account_summary(record: &AccountRecord) -> AccountSummary {
    AccountSummary {
        id: record.id,
        username: record.username.clone(),
        email: record.email.clone(),
    }
}

/// Account service for authentication operations
pub struct AccountService;

impl AccountService {
    /// Register a new account
    ///
    /// Field order matters twice: validation reports the first failing field
    /// (username, email, password, address, role), and the username
    /// collision is checked before the email collision so the error is
    /// deterministic when both collide.
    pub async fn signup(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &SignupRequest,
    ) -> Result<AuthResponse, ApiError> {
        validation::validate_username(&req.username).map_err(ApiError::Validation)?;
        validation::validate_email(&req.email).map_err(ApiError::Validation)?;
        validation::validate_password(&req.password).map_err(ApiError::Validation)?;
        validation::validate_address(&req.address).map_err(ApiError::Validation)?;

        let role = match req.role.as_deref() {
            None => Role::User,
            Some(raw) => raw.parse().map_err(ApiError::Validation)?,
        };

        if AccountRepository::username_exists(pool, &req.username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Duplicate("Username already taken".to_string()));
        }

        if AccountRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Duplicate("Email already registered".to_string()));
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let account = AccountRepository::create(
            pool,
            &req.username,
            &req.email,
            &password_hash,
            &req.address,
            role,
        )
        .await
        .map_err(ApiError::Internal)?;

        let token = jwt_service.issue(account.id).map_err(ApiError::Internal)?;

        info!(account_id = %account.id, "account created");

        Ok(AuthResponse {
            message: "Signup successful".to_string(),
            token,
            user: account_summary(&account),
        })
    }

    /// Sign in with email and password
    pub async fn signin(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        validation::validate_email(email).map_err(ApiError::Validation)?;
        validation::validate_password(password).map_err(ApiError::Validation)?;

        // Unknown email and wrong password answer identically
        let account = AccountRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(
            password.to_string(),
            account.password_hash.clone(),
        )
        .await
        .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = jwt_service.issue(account.id).map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            message: "Signin successful".to_string(),
            token,
            user: account_summary(&account),
        })
    }

    /// Get the caller's public account view
    ///
    /// A valid token can outlive its account; that surfaces here as 404.
    pub async fn get_profile(pool: &PgPool, account_id: Uuid) -> Result<AccountView, ApiError> {
        let account = AccountRepository::find_by_id(pool, account_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(account_view(&account))
    }

    /// Update the caller's address
    pub async fn update_address(
        pool: &PgPool,
        account_id: Uuid,
        address: &str,
    ) -> Result<AccountResponse, ApiError> {
        validation::validate_address(address).map_err(ApiError::Validation)?;

        let account = AccountRepository::update_address(pool, account_id, address)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(AccountResponse {
            message: "Address updated successfully".to_string(),
            user: account_view(&account),
        })
    }
}
