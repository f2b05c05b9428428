//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "uptime_seconds": 42, "dishes": 4, "orders": 3 }
//! ```

use std::sync::OnceLock;
use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use super::fallback::method_not_allowed;
use crate::core::ServerState;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// 记录启动时间 (首次调用生效)
pub fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health).fallback(method_not_allowed))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 当前菜品数量
    dishes: usize,
    /// 当前订单数量
    orders: usize,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let uptime = START_TIME.get_or_init(Instant::now).elapsed();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime.as_secs(),
        dishes: state.db.dishes.len(),
        orders: state.db.orders.len(),
    })
}
