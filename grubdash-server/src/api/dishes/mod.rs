//! Dish API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /dishes | GET | 菜品列表 |
//! | /dishes | POST | 创建菜品 |
//! | /dishes/{dish_id} | GET | 获取单个菜品 |
//! | /dishes/{dish_id} | PUT | 更新菜品 |
//!
//! 菜品不可删除，其他方法返回 405。

mod handler;
pub mod validate;

use axum::{Router, routing::get};

use super::fallback::method_not_allowed;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/dishes",
            get(handler::list)
                .post(handler::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .fallback(method_not_allowed),
        )
}
