#![cfg(test)]
//! 测试用的内存仓库实现

use database::{DatabaseError, DatabaseResult, Project, ProjectRepositoryTrait};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i32,
    rows: HashMap<i32, Project>,
}

/// 基于 [`HashMap`] 的项目仓库
///
/// `fetch_all_projects` 按ID倒序返回并去掉明细字段，用来验证服务层自己完成排序。
/// 克隆后共享同一份数据，测试可以保留一份克隆检查存储状态。
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入一条带明细的记录，返回分配的ID
    pub fn seed(&self, project: Project) -> i32 {
        let mut state = self.state.lock().unwrap();
        let stored = Self::store_next(&mut state, project);
        stored.project_id.unwrap_or_default()
    }

    /// 使用指定ID写入记录，不影响后续自动分配的ID
    pub fn seed_with_id(&self, project_id: i32, project: Project) {
        let mut state = self.state.lock().unwrap();
        Self::store(&mut state, project_id, project);
    }

    fn store_next(state: &mut MemoryState, project: Project) -> Project {
        state.next_id += 1;
        let id = state.next_id;
        Self::store(state, id, project)
    }

    fn store(state: &mut MemoryState, project_id: i32, mut project: Project) -> Project {
        project.project_id = Some(project_id);
        state.rows.insert(project_id, project.clone());
        project
    }

    /// 当前存储内容，按ID排序
    pub fn snapshot(&self) -> Vec<Project> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Project> = state.rows.values().cloned().collect();
        rows.sort_by_key(|p| p.project_id);
        rows
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryProjectRepository {
    async fn insert_project(&self, project: Project) -> DatabaseResult<Project> {
        let mut state = self.state.lock().unwrap();
        Ok(Self::store_next(&mut state, project))
    }

    async fn fetch_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Project> = state
            .rows
            .values()
            .map(|p| Project {
                materials: Vec::new(),
                steps: Vec::new(),
                categories: Vec::new(),
                ..p.clone()
            })
            .collect();
        rows.sort_by(|a, b| b.project_id.cmp(&a.project_id));
        Ok(rows)
    }

    async fn fetch_project_by_id(&self, project_id: i32) -> DatabaseResult<Option<Project>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&project_id).cloned())
    }

    async fn modify_project_details(&self, project: &Project) -> DatabaseResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(id) = project.project_id else {
            return Ok(false);
        };
        let Some(stored) = state.rows.get_mut(&id) else {
            return Ok(false);
        };
        stored.project_name = project.project_name.clone();
        stored.estimated_hours = project.estimated_hours;
        stored.actual_hours = project.actual_hours;
        stored.difficulty = project.difficulty;
        stored.notes = project.notes.clone();
        Ok(true)
    }

    async fn delete_project(&self, project_id: i32) -> DatabaseResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.remove(&project_id).is_some())
    }
}

/// 所有操作都返回连接错误的仓库
#[derive(Debug, Clone, Default)]
pub struct FailingProjectRepository;

impl FailingProjectRepository {
    fn error() -> DatabaseError {
        DatabaseError::connection("connection refused")
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for FailingProjectRepository {
    async fn insert_project(&self, _project: Project) -> DatabaseResult<Project> {
        Err(Self::error())
    }

    async fn fetch_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        Err(Self::error())
    }

    async fn fetch_project_by_id(&self, _project_id: i32) -> DatabaseResult<Option<Project>> {
        Err(Self::error())
    }

    async fn modify_project_details(&self, _project: &Project) -> DatabaseResult<bool> {
        Err(Self::error())
    }

    async fn delete_project(&self, _project_id: i32) -> DatabaseResult<bool> {
        Err(Self::error())
    }
}
