//! Expense model: the `expenses` row and its client-safe projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full expense record from the database. The id and created_at are
/// server-assigned; user_id is always taken from the session, never from
/// client input.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Expense {
    /// Convert to ExpenseInfo for client consumption.
    pub fn to_info(&self) -> ExpenseInfo {
        ExpenseInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            amount: self.amount,
            category: self.category.clone(),
            user_id: self.user_id.to_string(),
        }
    }
}

/// Expense information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseInfo {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub user_id: String,
}
