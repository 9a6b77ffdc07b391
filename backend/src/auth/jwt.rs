//! JWT token issuance and verification
//!
//! Tokens are stateless bearer credentials: the account id plus expiry
//! metadata, signed with the process-wide secret. There is no revocation
//! list; expiry is the only lifecycle bound.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid expensive key derivation on every
/// request. Create once at startup and store in AppState.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Issue a signed token for an account
    ///
    /// The token embeds the account id and expires `expiry_secs` from now
    /// (7 days under the default configuration).
    pub fn issue(&self, account_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            sub: account_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Fails when the signature does not check out or the expiry has passed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 604800)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let account_id = Uuid::new_v4();

        let token = service.issue(account_id).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, account_id.to_string());
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let service = create_test_service();
        let token = service.issue(Uuid::new_v4()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 604800);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = create_test_service();
        let result = service.verify("invalid.token.here");

        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry puts exp well past the default 60s leeway
        let service = JwtService::new("test-secret", -3600);
        let token = service.issue(Uuid::new_v4()).unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 604800);

        let token = other.issue(Uuid::new_v4()).unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
