//! Router fallbacks
//!
//! Unsupported methods on a known path and unknown paths both answer with the
//! regular error body.

use axum::extract::OriginalUri;
use http::Method;

use crate::utils::AppError;

/// 405 - method not supported on this path
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::method_not_allowed(method.as_str(), uri.path())
}

/// 404 - no route matches the path
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found(format!("Path not found: {}", uri.path()))
}
