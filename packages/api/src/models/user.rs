//! # User model
//!
//! Two representations of an account:
//!
//! - [`User`] (server only) — the complete `users` row, loaded via
//!   [`sqlx::FromRow`]: primary key (UUID v4), email, Argon2 password hash,
//!   and audit timestamps. [`User::to_info`] projects it for the client.
//! - [`UserInfo`] — the client-safe subset that crosses the server/client
//!   boundary via Dioxus server functions. It omits the password hash and
//!   timestamps and converts the `Uuid` to a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}
