//! This crate contains all shared UI for the workspace.

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod money;
pub use money::{format_inr, parse_amount, total_amount};
