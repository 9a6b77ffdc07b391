//! Domain model types shared across crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// Every account is either a regular `user` or an `admin`. Only admins may
/// create, update, or delete catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err("Role must be either 'user' or 'admin'".to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two per-account membership lists
///
/// Cart and favourites share the same add/remove state machine; the only
/// behavioral difference is the pre-insert book existence check, which
/// applies to favourites only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Cart,
    Favourites,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Cart => "cart",
            ListKind::Favourites => "favourites",
        }
    }

    /// Whether `add` verifies the book exists before inserting.
    ///
    /// Favourites checks, cart does not. Asymmetric on purpose; the toggle
    /// keeps the policy a one-line change.
    pub fn checks_book_exists(&self) -> bool {
        matches!(self, ListKind::Favourites)
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
