//! Employee Repository

use super::{RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::Employee;
use sqlx::SqlitePool;

const EMPLOYEE_COLUMNS: &str = "id, name, position, salary, department_id";

/// Keyed store over employee rows
///
/// Lookups return `None` and deletes return `false` for a missing id.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `id` is `None`, otherwise update the row with that id.
    /// Returns the stored row; an id with no row is `RepoError::NotFound`.
    async fn save(&self, employee: Employee) -> RepoResult<Employee>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;

    /// All rows ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// Exact (case-sensitive) name match, ordered by id
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>>;

    /// Returns whether a row was removed
    async fn delete_by_id(&self, id: i64) -> RepoResult<bool>;

    /// Delete by the entity's id; an unsaved entity is a no-op
    async fn delete(&self, employee: &Employee) -> RepoResult<bool> {
        match employee.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }

    /// Returns the number of rows removed
    async fn delete_all(&self) -> RepoResult<u64>;

    async fn exists_by_id(&self, id: i64) -> RepoResult<bool>;

    async fn count(&self) -> RepoResult<i64>;
}

/// SQLite-backed employee repository
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        let saved = match employee.id {
            None => {
                let sql = format!(
                    "INSERT INTO employee (name, position, salary, department_id) VALUES (?1, ?2, ?3, ?4) RETURNING {EMPLOYEE_COLUMNS}"
                );
                sqlx::query_as::<_, Employee>(&sql)
                    .bind(&employee.name)
                    .bind(&employee.position)
                    .bind(employee.salary)
                    .bind(employee.department_id)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE employee SET name = ?1, position = ?2, salary = ?3, department_id = ?4 \
                     WHERE id = ?5 RETURNING {EMPLOYEE_COLUMNS}"
                );
                // 已删除的行不会被重新创建
                sqlx::query_as::<_, Employee>(&sql)
                    .bind(&employee.name)
                    .bind(&employee.position)
                    .bind(employee.salary)
                    .bind(employee.department_id)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(RepoError::NotFound(id))?
            }
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE name = ? ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn delete_by_id(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM employee")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: i64) -> RepoResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found > 0)
    }

    async fn count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
