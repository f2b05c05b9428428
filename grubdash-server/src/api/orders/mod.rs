//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | GET | 订单列表 |
//! | /orders | POST | 创建订单 |
//! | /orders/{order_id} | GET | 获取单个订单 |
//! | /orders/{order_id} | PUT | 更新订单 |
//! | /orders/{order_id} | DELETE | 删除待处理订单 |

mod handler;
pub mod validate;

use axum::{Router, routing::get};

use super::fallback::method_not_allowed;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/orders",
            get(handler::list)
                .post(handler::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete)
                .fallback(method_not_allowed),
        )
}
