//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

/// 项目信息结构体
///
/// `project_id` 由数据库在插入时分配，插入前为 `None`。
/// `materials`/`steps`/`categories` 只有在按ID查询详情时才会填充，列表查询中始终为空。
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub project_id: Option<i32>,
    pub project_name: String,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,

    #[sqlx(skip)]
    pub materials: Vec<Material>,
    #[sqlx(skip)]
    pub steps: Vec<Step>,
    #[sqlx(skip)]
    pub categories: Vec<Category>,
}

impl Project {
    /// 创建一个尚未保存的项目
    pub fn new<T: Into<String>>(project_name: T) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }
}

/// 项目所需材料
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Material {
    pub material_id: i32,
    pub project_id: i32,
    pub material_name: String,
    pub num_required: Option<i32>,
    pub cost: Option<f64>,
}

/// 项目步骤
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Step {
    pub step_id: i32,
    pub project_id: i32,
    pub step_text: String,
    pub step_order: i32,
}

/// 项目分类
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}
