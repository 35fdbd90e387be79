//! 工具模块 - 日志与请求校验
//!
//! - [`logger`] - tracing 初始化
//! - [`ValidatedJson`] - 带校验的 JSON 提取器
//! - [`ValidatedPath`] - 路径参数提取器, 错误统一为 JSON

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use validation::{ValidatedJson, ValidatedPath};
