//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/employees | GET | 员工列表 |
//! | /api/employees | POST | 创建员工 |
//! | /api/employees/{id} | GET | 查询员工 |
//! | /api/employees/{id} | PUT | 更新员工 |
//! | /api/employees/{id} | DELETE | 删除员工 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
