//! 请求日志中间件
//!
//! 每个请求包在一个 `request` span 里 (request_id / method / path)，
//! 结束时记录一条带状态码和耗时的事件。

use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http::StatusCode;
use tower_http::request_id::RequestId;
use tracing::{Instrument, info, info_span, warn};

/// 请求日志中间件
///
/// 必须放在 `SetRequestIdLayer` 内层，request id 从其写入的扩展中读取。
/// 4xx / 5xx 响应以 warn 级别记录。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let span = info_span!(
        "request",
        request_id = %request_id(&req),
        method = %req.method(),
        path = %route_path(&req),
    );

    let response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| log_completion(response.status(), start.elapsed()));
    response
}

/// `x-request-id` set by the outer layer, `-` when absent
fn request_id(req: &Request) -> String {
    req.extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string()
}

/// 匹配的路由模板 (`/orders/{order_id}`)，未匹配时为原始路径
fn route_path(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

fn log_completion(status: StatusCode, latency: Duration) {
    let status_code = status.as_u16();
    let latency_ms = latency.as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        warn!(status = status_code, latency_ms, "Request failed");
    } else {
        info!(status = status_code, latency_ms, "Request completed");
    }
}
