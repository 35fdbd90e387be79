use std::sync::Arc;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{SqliteDepartmentRepository, SqliteEmployeeRepository};
use crate::services::EmployeeService;

/// 服务器状态 - 在所有 handler 间共享
///
/// 克隆开销很小 (内部均为 Arc)
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub employees: Arc<EmployeeService>,
}

impl ServerState {
    pub fn new(config: Config, employees: EmployeeService) -> Self {
        Self {
            config: Arc::new(config),
            employees: Arc::new(employees),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录
    /// 2. 打开数据库并执行迁移
    /// 3. 组装 repository 和 service
    pub async fn initialize(config: &Config) -> Result<Self> {
        let work_dir = config.work_dir_path();
        std::fs::create_dir_all(&work_dir).map_err(|e| {
            ServerError::Config(format!(
                "Failed to create work dir {}: {e}",
                work_dir.display()
            ))
        })?;

        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::from_db(config.clone(), db))
    }

    /// 基于已打开的数据库组装状态 (测试中配合 `DbService::in_memory`)
    pub fn from_db(config: Config, db: DbService) -> Self {
        let employees = EmployeeService::new(
            Arc::new(SqliteEmployeeRepository::new(db.pool.clone())),
            Arc::new(SqliteDepartmentRepository::new(db.pool)),
        );
        Self::new(config, employees)
    }
}
