//! # API 统一错误处理
//!
//! 将核心错误类型统一映射到 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use candlekit_core::market::error::CandleError;
use thiserror::Error;

use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求参数错误 (400)
    #[error("请求参数错误: {0}")]
    BadRequest(String),

    /// 下层业务错误 (500)
    #[error("内部服务错误: {0}")]
    Internal(String),
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => {
                // 内部错误只记录日志，不向客户端透传细节
                tracing::error!("内部服务错误: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ApiErrorResponse::from_msg(message));
        (status, body).into_response()
    }
}

/// 从 `CandleError` 转换
impl From<CandleError> for ApiError {
    fn from(err: CandleError) -> Self {
        match &err {
            CandleError::InvalidArgument(msg) => ApiError::BadRequest(msg.clone()),
            CandleError::InsufficientData(_)
            | CandleError::MalformedInput { .. }
            | CandleError::DataUnavailable(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_error_mapping() {
        let bad = ApiError::from(CandleError::InvalidArgument("x".into()));
        assert!(matches!(bad, ApiError::BadRequest(_)));

        let unavailable = ApiError::from(CandleError::DataUnavailable("gone".into()));
        assert!(matches!(unavailable, ApiError::Internal(msg) if msg.contains("gone")));

        let insufficient = ApiError::from(CandleError::InsufficientData("empty".into()));
        assert_eq!(
            insufficient.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
