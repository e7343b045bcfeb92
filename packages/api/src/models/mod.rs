//! Data models for the application.

pub mod expense;
pub mod user;

#[cfg(feature = "server")]
pub use expense::Expense;
pub use expense::ExpenseInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
