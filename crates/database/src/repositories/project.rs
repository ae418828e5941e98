//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{Category, Material, Project, Step};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 创建新项目
    ///
    /// 只写入 `project` 表，材料/步骤/分类不随项目一起创建。
    /// `NUMERIC` 列通过 `float8` 参数写入，由数据库完成赋值转换。
    async fn insert_project(&self, mut project: Project) -> DatabaseResult<Project> {
        debug!("📝 创建项目: {:#?}", project);

        let project_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2::float8, $3::float8, $4, $5)
            RETURNING project_id;
            "#,
        )
        .bind(&project.project_name)
        .bind(project.estimated_hours)
        .bind(project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&self.pool)
        .await?;

        project.project_id = Some(project_id);

        debug!("✅ 项目创建成功, ID: {}", project_id);
        Ok(project)
    }

    /// 获取全部项目概要
    ///
    /// 按项目名称排序返回，调用方需要自行决定最终顺序。
    async fn fetch_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        debug!("🔍 查询全部项目");

        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT project_id,
                   project_name,
                   estimated_hours::float8 AS estimated_hours,
                   actual_hours::float8 AS actual_hours,
                   difficulty,
                   notes
            FROM project
            ORDER BY project_name;
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    /// 根据 ID 获取项目详情
    ///
    /// 项目本身和材料、步骤、分类在同一个事务内读取，保证明细与项目一致。
    async fn fetch_project_by_id(&self, project_id: i32) -> DatabaseResult<Option<Project>> {
        debug!("🔍 根据 ID 获取项目: {}", project_id);

        let mut tx = self.pool.begin().await?;

        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT project_id,
                   project_name,
                   estimated_hours::float8 AS estimated_hours,
                   actual_hours::float8 AS actual_hours,
                   difficulty,
                   notes
            FROM project
            WHERE project_id = $1;
            "#,
        )
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut project) = project else {
            tx.commit().await?;
            debug!("📭 项目不存在: {}", project_id);
            return Ok(None);
        };

        project.materials = sqlx::query_as::<_, Material>(
            r#"
            SELECT material_id, project_id, material_name, num_required, cost::float8 AS cost
            FROM material
            WHERE project_id = $1
            ORDER BY material_id;
            "#,
        )
        .bind(project_id)
        .fetch_all(&mut *tx)
        .await?;

        project.steps = sqlx::query_as::<_, Step>(
            r#"
            SELECT step_id, project_id, step_text, step_order
            FROM step
            WHERE project_id = $1
            ORDER BY step_order;
            "#,
        )
        .bind(project_id)
        .fetch_all(&mut *tx)
        .await?;

        project.categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT c.category_id, c.category_name
            FROM project_category pc
            JOIN category c USING (category_id)
            WHERE pc.project_id = $1
            ORDER BY c.category_name;
            "#,
        )
        .bind(project_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!("✅ 项目获取成功: {:#?}", project);
        Ok(Some(project))
    }

    /// 更新项目信息
    ///
    /// 整体替换所有可编辑字段（不是部分更新），`None` 会被写为 `NULL`。
    async fn modify_project_details(&self, project: &Project) -> DatabaseResult<bool> {
        debug!("🔄 更新项目信息: {:#?}", project);

        let result = sqlx::query(
            r#"
            UPDATE project
            SET project_name = $2,
                estimated_hours = $3::float8,
                actual_hours = $4::float8,
                difficulty = $5,
                notes = $6
            WHERE project_id = $1;
            "#,
        )
        .bind(project.project_id)
        .bind(&project.project_name)
        .bind(project.estimated_hours)
        .bind(project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() == 1;
        debug!("✅ 项目更新完成, 影响行数: {}", result.rows_affected());
        Ok(updated)
    }

    /// 删除项目
    ///
    /// 材料、步骤和分类关联通过外键级联删除。
    async fn delete_project(&self, project_id: i32) -> DatabaseResult<bool> {
        debug!("🗑️ 删除项目: {}", project_id);

        let result = sqlx::query("DELETE FROM project WHERE project_id = $1;")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() == 1;
        debug!("✅ 项目删除完成, 影响行数: {}", result.rows_affected());
        Ok(deleted)
    }
}
