//! 服务层错误类型
//!
//! 数据库错误原样透传，只有"记录不存在"的两类情况会被重新分类为带项目ID的领域错误。

use database::DatabaseError;
use std::fmt;
use thiserror::Error;

/// 触发存在性检查失败的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOperation {
    Update,
    Delete,
}

impl fmt::Display for ProjectOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectOperation::Update => f.write_str("update"),
            ProjectOperation::Delete => f.write_str("delete"),
        }
    }
}

/// 错误分类，便于上层（例如HTTP层）映射为不同的响应码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Storage,
    NotFound,
    PreconditionFailed,
}

/// 服务层错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 仓库层数据库错误，不做任何处理直接透传
    #[error(transparent)]
    Storage(#[from] DatabaseError),

    /// 按ID查询时项目不存在
    #[error("Project with project ID={0} does not exist.")]
    NotFound(i32),

    /// 更新/删除时没有匹配到任何记录
    #[error("Project with ID={id} does not exist, {operation} not applied.")]
    PreconditionFailed { id: i32, operation: ProjectOperation },

    /// 更新的项目还没有ID（尚未保存）
    #[error("Project has no ID, {operation} not applied.")]
    MissingProjectId { operation: ProjectOperation },
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            ServiceError::Storage(_) => ServiceErrorKind::Storage,
            ServiceError::NotFound(_) => ServiceErrorKind::NotFound,
            ServiceError::PreconditionFailed { .. } | ServiceError::MissingProjectId { .. } => {
                ServiceErrorKind::PreconditionFailed
            }
        }
    }

    /// 导致失败的项目ID
    pub fn project_id(&self) -> Option<i32> {
        match self {
            ServiceError::NotFound(id) | ServiceError::PreconditionFailed { id, .. } => Some(*id),
            ServiceError::Storage(_) | ServiceError::MissingProjectId { .. } => None,
        }
    }
}

/// 服务层操作结果类型
pub type ServiceResult<T> = Result<T, ServiceError>;
