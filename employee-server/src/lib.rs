//! Employee Server - 员工管理 REST 服务
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、启动
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务逻辑 (员工服务)
//! ├── db/            # SQLite 连接池、迁移、repository
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志初始化、请求校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use services::{EmployeeService, ServiceError};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;
