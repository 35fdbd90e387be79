//! Department Model
//!
//! Departments are referenced by employees and resolved read-only; this crate
//! never creates or mutates them.

use serde::{Deserialize, Serialize};

/// Department entity (display fields only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    /// Short code shown in employee listings, e.g. "LW"
    pub code: String,
    pub head_name: Option<String>,
}
