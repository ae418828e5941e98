//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::services::error::ServiceResult;
use database::Project;

/// 项目服务 trait 定义
///
/// 定义了项目相关的业务逻辑接口，作为应用层的端口(Port)。
/// HTTP 层通过 `Arc<dyn ProjectServiceTrait>` 使用，具体实现由 [`ProjectService`](crate::services::ProjectService) 提供
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 创建新项目
    ///
    /// # 返回值
    /// 返回带有新分配ID的项目
    async fn add_project(&self, project: Project) -> ServiceResult<Project>;

    /// 获取全部项目概要，按项目ID升序排列
    async fn fetch_all_projects(&self) -> ServiceResult<Vec<Project>>;

    /// 根据 ID 获取项目详情
    ///
    /// # 错误
    /// 项目不存在时返回 [`ServiceError::NotFound`](crate::services::ServiceError::NotFound)
    async fn fetch_project_by_id(&self, project_id: i32) -> ServiceResult<Project>;

    /// 整体替换项目信息
    ///
    /// # 错误
    /// 项目不存在时返回 [`ServiceError::PreconditionFailed`](crate::services::ServiceError::PreconditionFailed)
    async fn modify_project_details(&self, project: Project) -> ServiceResult<()>;

    /// 删除项目
    ///
    /// # 错误
    /// 项目不存在时返回 [`ServiceError::PreconditionFailed`](crate::services::ServiceError::PreconditionFailed)
    async fn delete_project(&self, project_id: i32) -> ServiceResult<()>;
}
