//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`validation`] - 校验链与字段校验
//! - [`id`] - 记录 ID 生成
//! - 日志等工具

pub mod id;
pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
