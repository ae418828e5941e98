//! 项目接口的请求/响应模型

use crate::models::err::AppError;
use color_eyre::eyre::eyre;
use database::{Category, Material, Project, Step};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 工时列为 `NUMERIC(7, 2)`，超过该值数据库会拒绝写入
const MAX_HOURS: f64 = 99999.99;

/// 创建/更新项目的请求体
///
/// 更新是整体替换，未提供的可选字段会被清空。
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectPayload {
    #[schema(example = "Deck")]
    #[validate(length(min = 1, max = 128))]
    /// 项目名称
    pub project_name: String,

    #[schema(example = 12.5)]
    #[validate(range(min = 0.0, max = MAX_HOURS))]
    /// 预估工时
    pub estimated_hours: Option<f64>,

    #[schema(example = 14.0)]
    #[validate(range(min = 0.0, max = MAX_HOURS))]
    /// 实际工时
    pub actual_hours: Option<f64>,

    #[schema(example = 3)]
    #[validate(range(min = 1, max = 5))]
    /// 难度（1~5）
    pub difficulty: Option<i32>,

    #[schema(example = "use treated lumber")]
    /// 备注
    pub notes: Option<String>,
}

impl ProjectPayload {
    /// 转换为数据库模型，`project_id` 为 `None` 表示新建
    pub fn into_project(self, project_id: Option<i32>) -> Project {
        Project {
            project_id,
            project_name: self.project_name,
            estimated_hours: self.estimated_hours,
            actual_hours: self.actual_hours,
            difficulty: self.difficulty,
            notes: self.notes,
            ..Default::default()
        }
    }
}

/// 项目列表中的概要信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectInfo {
    #[schema(example = 15)]
    /// 项目ID
    pub id: i32,

    #[schema(example = "Deck")]
    /// 项目名称
    pub project_name: String,

    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// 材料信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct MaterialInfo {
    pub id: i32,
    pub material_name: String,
    pub num_required: Option<i32>,
    pub cost: Option<f64>,
}

/// 步骤信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct StepInfo {
    pub id: i32,
    pub step_text: String,
    pub step_order: i32,
}

/// 分类信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct CategoryInfo {
    pub id: i32,
    pub category_name: String,
}

/// 项目详情，包含材料、步骤和分类
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectDetail {
    #[schema(example = 15)]
    /// 项目ID
    pub id: i32,

    #[schema(example = "Deck")]
    /// 项目名称
    pub project_name: String,

    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    pub materials: Vec<MaterialInfo>,
    pub steps: Vec<StepInfo>,
    pub categories: Vec<CategoryInfo>,
}

/// 存储层返回的项目必须带有ID，否则说明仓库实现违反了约定
fn stored_id(p: &Project) -> Result<i32, AppError> {
    p.project_id
        .ok_or_else(|| AppError::InternalError(eyre!("stored project '{}' has no ID", p.project_name)))
}

impl TryFrom<Project> for ProjectInfo {
    type Error = AppError;

    fn try_from(p: Project) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored_id(&p)?,
            project_name: p.project_name,
            estimated_hours: p.estimated_hours,
            actual_hours: p.actual_hours,
            difficulty: p.difficulty,
            notes: p.notes,
        })
    }
}

impl From<Material> for MaterialInfo {
    fn from(m: Material) -> Self {
        Self {
            id: m.material_id,
            material_name: m.material_name,
            num_required: m.num_required,
            cost: m.cost,
        }
    }
}

impl From<Step> for StepInfo {
    fn from(s: Step) -> Self {
        Self {
            id: s.step_id,
            step_text: s.step_text,
            step_order: s.step_order,
        }
    }
}

impl From<Category> for CategoryInfo {
    fn from(c: Category) -> Self {
        Self {
            id: c.category_id,
            category_name: c.category_name,
        }
    }
}

impl TryFrom<Project> for ProjectDetail {
    type Error = AppError;

    fn try_from(p: Project) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored_id(&p)?,
            project_name: p.project_name,
            estimated_hours: p.estimated_hours,
            actual_hours: p.actual_hours,
            difficulty: p.difficulty,
            notes: p.notes,
            materials: p.materials.into_iter().map(Into::into).collect(),
            steps: p.steps.into_iter().map(Into::into).collect(),
            categories: p.categories.into_iter().map(Into::into).collect(),
        })
    }
}
