//! Department Repository (read-only)

use super::RepoResult;
use async_trait::async_trait;
use shared::models::Department;
use sqlx::SqlitePool;

/// Resolves department display fields for employee responses
#[async_trait]
pub trait DepartmentLookup: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Department>>;
}

#[derive(Clone)]
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentLookup for SqliteDepartmentRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Department>> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT id, code, head_name FROM department WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }
}
