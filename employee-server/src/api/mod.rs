//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口

pub mod employees;
pub mod health;

use std::time::Duration;

use axum::http::{StatusCode, Uri};
use axum::{Router, middleware};
use shared::error::AppError;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;
use crate::middleware::logging_middleware;

/// Assemble every route with the shared middleware stack
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// 未匹配的路由同样返回 JSON 错误体
async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
