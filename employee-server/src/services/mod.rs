//! 服务层 - 员工业务逻辑
//!
//! - [`EmployeeService`] - 员工增删改查 (部门必须存在)
//! - [`ServiceError`] - 服务层错误，转换为 `AppError`

pub mod employee;
pub mod error;

pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
