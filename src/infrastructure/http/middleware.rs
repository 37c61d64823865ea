//! HTTP Middleware
//!
//! - API Key 校验（写接口和管理接口）
//! - HTTP 状态码错误日志

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;

/// API Key 请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// API Key 校验中间件
///
/// 请求头与配置的密钥逐字节比较；缺失、为空或不匹配时直接返回 401，
/// 被包裹的 handler 不会执行
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = request.headers().get(API_KEY_HEADER);
    let present = supplied.is_some();
    let authorized = supplied
        .map(|key| !key.is_empty() && key.as_bytes() == state.api_key.as_bytes())
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            header_present = present,
            "API key rejected"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
