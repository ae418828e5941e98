//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::Project;
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目创建
/// - 项目列表（仅概要字段，无序）
/// - 项目详情查询
/// - 项目更新
/// - 项目删除
///
/// "记录不存在"通过 [`Option`]/[`bool`] 返回值表达，与数据库错误 [`DatabaseError`](crate::DatabaseError) 严格区分。
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目信息，`project_id` 会被忽略
    ///
    /// # 返回值
    /// 返回带有新分配 `project_id` 的项目
    async fn insert_project(&self, project: Project) -> DatabaseResult<Project>;

    /// 获取全部项目
    ///
    /// # 返回值
    /// 返回所有项目的概要信息（不含材料/步骤/分类），不保证顺序
    async fn fetch_all_projects(&self) -> DatabaseResult<Vec<Project>>;

    /// 根据 ID 获取项目详情
    ///
    /// # 参数
    /// - `project_id`: 项目 ID
    ///
    /// # 返回值
    /// 返回包含材料、步骤、分类的完整项目；不存在时返回 `None`
    async fn fetch_project_by_id(&self, project_id: i32) -> DatabaseResult<Option<Project>>;

    /// 更新项目信息（整体替换）
    ///
    /// # 参数
    /// - `project`: 新的项目信息，通过 `project_id` 定位记录
    ///
    /// # 返回值
    /// 当且仅当恰好更新了一条记录时返回 `true`
    async fn modify_project_details(&self, project: &Project) -> DatabaseResult<bool>;

    /// 删除项目
    ///
    /// # 参数
    /// - `project_id`: 项目 ID
    ///
    /// # 返回值
    /// 当且仅当恰好删除了一条记录时返回 `true`
    async fn delete_project(&self, project_id: i32) -> DatabaseResult<bool>;
}
