//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`dishes`] - 菜品接口 (无删除)
//! - [`orders`] - 订单接口
//! - [`fallback`] - 405 / 404 处理
//! - [`extract`] - `{ "data": ... }` 请求体提取

pub mod extract;
pub mod fallback;

pub mod dishes;
pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
pub use extract::RequestData;
