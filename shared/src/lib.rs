//! Shared types for the employee service
//!
//! Domain models, request/response DTOs and the unified error system used by
//! the server and by API clients.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
