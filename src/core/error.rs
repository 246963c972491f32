//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ApiResponse;

/// 对外公开的 404 消息
pub const ROUTE_NOT_FOUND: &str = "Route not found";
/// 对外公开的 500 消息
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// 核心错误类型
///
/// 只区分两类：路由未匹配 和 处理器内部失败。
/// 内部失败的细节只写日志，不返回给客户端。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("route not found")]
    NotFound,
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let user_message = match &self {
            CoreError::NotFound => ROUTE_NOT_FOUND,
            CoreError::InternalServerError(detail) => {
                error!(error = %detail, "处理请求失败");
                INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ApiResponse::<()>::failure(user_message))).into_response()
    }
}
