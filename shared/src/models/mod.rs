//! Data models
//!
//! Shared between the employee server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod department;
pub mod employee;

pub use department::*;
pub use employee::*;
