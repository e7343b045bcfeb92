//! # API crate — shared fullstack server functions for the Expense Manager
//!
//! This crate is the single integration boundary of the application. It defines every
//! Dioxus server function that the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication, session key, password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database models (`User`, `Expense`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Expenses**: `list_expenses`, `create_expense`, `update_expense`, `delete_expense`
//!
//! Every expense function resolves the owner from the session, never from client
//! input, so a user can only ever read or mutate their own rows.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::{ExpenseInfo, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account with email and password.
///
/// Does not establish a session: the signup screen sends the user to the
/// login screen after a successful registration.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Helper: resolve the session to the authenticated user's id.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// List all expenses owned by the current user, newest first.
#[cfg(feature = "server")]
#[get("/api/expenses", session: tower_sessions::Session)]
pub async fn list_expenses() -> Result<Vec<ExpenseInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Expense;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let expenses: Vec<Expense> = sqlx::query_as(
        "SELECT * FROM expenses WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(expenses.iter().map(|e| e.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/expenses")]
pub async fn list_expenses() -> Result<Vec<ExpenseInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an expense owned by the current user.
#[cfg(feature = "server")]
#[post("/api/expenses", session: tower_sessions::Session)]
pub async fn create_expense(
    title: String,
    amount: f64,
    category: String,
) -> Result<ExpenseInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Expense;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let expense: Expense = sqlx::query_as(
        "INSERT INTO expenses (title, amount, category, user_id) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&title)
    .bind(amount)
    .bind(&category)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(expense.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses")]
pub async fn create_expense(
    title: String,
    amount: f64,
    category: String,
) -> Result<ExpenseInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Overwrite title, amount, and category of one expense owned by the current
/// user. The id, owner, and creation time never change.
#[cfg(feature = "server")]
#[post("/api/expenses/update", session: tower_sessions::Session)]
pub async fn update_expense(
    id: String,
    title: String,
    amount: f64,
    category: String,
) -> Result<ExpenseInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Expense;

    let user_id = session_user_id(&session).await?;

    let expense_id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let expense: Option<Expense> = sqlx::query_as(
        "UPDATE expenses SET title = $1, amount = $2, category = $3 WHERE id = $4 AND user_id = $5 RETURNING *",
    )
    .bind(&title)
    .bind(amount)
    .bind(&category)
    .bind(expense_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(expense) = expense else {
        return Err(ServerFnError::new("Expense not found"));
    };

    Ok(expense.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/update")]
pub async fn update_expense(
    id: String,
    title: String,
    amount: f64,
    category: String,
) -> Result<ExpenseInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete one expense owned by the current user.
#[cfg(feature = "server")]
#[post("/api/expenses/delete", session: tower_sessions::Session)]
pub async fn delete_expense(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let expense_id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM expenses WHERE id = $1 AND user_id = $2")
        .bind(expense_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/delete")]
pub async fn delete_expense(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
