//! Authentication middleware
//!
//! Provides the `AuthUser` extractor that protected handlers use to obtain
//! the caller identity.
//!
//! Status contract: a missing header or missing token answers 401; a token
//! that is present but fails verification answers 403, with invalid and
//! expired deliberately conflated. The extractor never touches the database;
//! identity is trusted from the token alone, and services re-check account
//! existence at first use.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated caller extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthenticated("Access denied. Token missing.".to_string())
            })?;

        // Check the case-sensitive Bearer prefix; anything else counts as
        // a missing token
        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthenticated("Access denied. Token missing.".to_string())
            })?;

        // Bad signature and expired both map to 403
        let claims = app_state
            .jwt()
            .verify(token)
            .map_err(|_| ApiError::Forbidden("Invalid or expired token.".to_string()))?;

        let account_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Forbidden("Invalid or expired token.".to_string()))?;

        Ok(AuthUser { account_id })
    }
}
