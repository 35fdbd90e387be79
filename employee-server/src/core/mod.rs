//! 核心模块 - 配置、共享状态、启动
//!
//! - [`Config`] - 环境变量配置
//! - [`ServerState`] - handler 共享状态 (员工服务)
//! - [`Server`] - HTTP 服务器 (axum + 优雅关闭)
//! - [`ServerError`] - 启动错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
