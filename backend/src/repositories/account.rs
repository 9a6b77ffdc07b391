//! Account repository for database operations
//!
//! Accounts carry their cart and favourites inline as `uuid[]` columns,
//! mirroring a document-store user record. List writes replace the whole
//! column; see the service layer for the read-modify-write contract.

use anyhow::Result;
use bookstore_shared::models::{ListKind, Role};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Account record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub role: String,
    pub cart: Vec<Uuid>,
    pub favourites: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountRecord {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }

    /// The stored membership list for a kind
    pub fn list(&self, kind: ListKind) -> &[Uuid] {
        match kind {
            ListKind::Cart => &self.cart,
            ListKind::Favourites => &self.favourites,
        }
    }
}

/// Account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// Create a new account with empty cart and favourites
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        address: &str,
        role: Role,
    ) -> Result<AccountRecord> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (username, email, password_hash, address, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, address, role, cart, favourites,
                      created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(address)
        .bind(role.as_str())
        .fetch_one(pool)
        .await?;

        Ok(account)
    }

    /// Find account by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, username, email, password_hash, address, role, cart, favourites,
                   created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Find account by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, username, email, password_hash, address, role, cart, favourites,
                   created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Check if a username is taken
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Check if an email is registered
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Update an account's address
    ///
    /// Returns None when the account no longer exists.
    pub async fn update_address(
        pool: &PgPool,
        id: Uuid,
        address: &str,
    ) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            UPDATE accounts
            SET address = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, email, password_hash, address, role, cart, favourites,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(address)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Replace a membership list column wholesale
    ///
    /// Last write wins: there is no compare-and-swap against the previously
    /// read value.
    pub async fn set_list(pool: &PgPool, id: Uuid, kind: ListKind, items: &[Uuid]) -> Result<()> {
        let sql = match kind {
            ListKind::Cart => "UPDATE accounts SET cart = $2, updated_at = NOW() WHERE id = $1",
            ListKind::Favourites => {
                "UPDATE accounts SET favourites = $2, updated_at = NOW() WHERE id = $1"
            }
        };

        sqlx::query(sql).bind(id).bind(items).execute(pool).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_role(role: &str) -> AccountRecord {
        AccountRecord {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            address: "123 Test Street".to_string(),
            role: role.to_string(),
            cart: vec![],
            favourites: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(record_with_role("admin").is_admin());
        assert!(!record_with_role("user").is_admin());
    }

    #[test]
    fn test_list_selects_the_right_column() {
        let mut record = record_with_role("user");
        let in_cart = Uuid::new_v4();
        record.cart.push(in_cart);

        assert_eq!(record.list(ListKind::Cart), &[in_cart]);
        assert!(record.list(ListKind::Favourites).is_empty());
    }
}
