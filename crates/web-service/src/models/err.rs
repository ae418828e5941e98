use crate::services::{ServiceError, ServiceErrorKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 服务层错误
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::ServiceError(err @ ServiceError::MissingProjectId { .. }) => {
                (StatusCode::BAD_REQUEST, format!("Invalid project: {err}")).into_response()
            }
            AppError::ServiceError(err) => match err.kind() {
                ServiceErrorKind::NotFound | ServiceErrorKind::PreconditionFailed => {
                    (StatusCode::NOT_FOUND, format!("Resource not found: {err}")).into_response()
                }
                ServiceErrorKind::Storage => {
                    error!("❌ 数据库错误: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {err}")).into_response()
                }
            },
            AppError::InternalError(err) => {
                error!("❌ 内部错误: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response()
            }
        }
    }
}
