//! 项目服务
//!
//! 提供项目相关的业务逻辑操作：
//! - 列表结果按项目ID升序排列
//! - 查询/更新/删除不存在的项目时返回带ID的领域错误
//!
//! 除此之外所有调用都直接委托给仓库层，数据库错误原样返回。

use crate::services::error::{ProjectOperation, ServiceError, ServiceResult};
use crate::services::traits::ProjectServiceTrait;
use database::{Project, ProjectRepositoryTrait};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: PR,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: PR) -> Self {
        Self { project_repository }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    async fn add_project(&self, project: Project) -> ServiceResult<Project> {
        Ok(self.project_repository.insert_project(project).await?)
    }

    async fn fetch_all_projects(&self) -> ServiceResult<Vec<Project>> {
        let mut projects = self.project_repository.fetch_all_projects().await?;
        projects.sort_by_key(|p| p.project_id);
        Ok(projects)
    }

    async fn fetch_project_by_id(&self, project_id: i32) -> ServiceResult<Project> {
        self.project_repository
            .fetch_project_by_id(project_id)
            .await?
            .ok_or_else(|| {
                debug!("📭 项目不存在: {}", project_id);
                ServiceError::NotFound(project_id)
            })
    }

    async fn modify_project_details(&self, project: Project) -> ServiceResult<()> {
        let operation = ProjectOperation::Update;
        let Some(project_id) = project.project_id else {
            warn!("⚠️ 更新的项目缺少ID: {}", project.project_name);
            return Err(ServiceError::MissingProjectId { operation });
        };

        if !self.project_repository.modify_project_details(&project).await? {
            warn!("⚠️ 更新失败，项目不存在: {}", project_id);
            return Err(ServiceError::PreconditionFailed { id: project_id, operation });
        }
        Ok(())
    }

    async fn delete_project(&self, project_id: i32) -> ServiceResult<()> {
        if !self.project_repository.delete_project(project_id).await? {
            warn!("⚠️ 删除失败，项目不存在: {}", project_id);
            return Err(ServiceError::PreconditionFailed {
                id: project_id,
                operation: ProjectOperation::Delete,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceErrorKind;
    use crate::test_support::{FailingProjectRepository, MemoryProjectRepository};
    use database::{Category, DatabaseError, Material, Step};

    fn service() -> (ProjectService<MemoryProjectRepository>, MemoryProjectRepository) {
        let repo = MemoryProjectRepository::new();
        (ProjectService::new(repo.clone()), repo)
    }

    fn detailed_project(name: &str) -> Project {
        Project {
            estimated_hours: Some(10.0),
            actual_hours: Some(12.5),
            difficulty: Some(2),
            notes: Some("weekend job".to_string()),
            materials: vec![Material {
                material_id: 1,
                project_id: 0,
                material_name: "2x4".to_string(),
                num_required: Some(8),
                cost: Some(3.75),
            }],
            steps: vec![Step {
                step_id: 1,
                project_id: 0,
                step_text: "Measure".to_string(),
                step_order: 1,
            }],
            categories: vec![Category {
                category_id: 1,
                category_name: "Outdoor".to_string(),
            }],
            ..Project::new(name)
        }
    }

    #[tokio::test]
    async fn test_add_returns_assigned_id() {
        let (service, repo) = service();

        let stored = service.add_project(Project::new("Deck")).await.unwrap();

        assert_eq!(stored.project_name, "Deck");
        let id = stored.project_id.expect("id assigned by store");
        assert_eq!(repo.snapshot().len(), 1);
        assert_eq!(repo.snapshot()[0].project_id, Some(id));
    }

    #[tokio::test]
    async fn test_fetch_all_sorted_by_id() {
        let (service, _repo) = service();
        let deck = service.add_project(Project::new("Deck")).await.unwrap();
        let fence = service.add_project(Project::new("Fence")).await.unwrap();
        let arbor = service.add_project(Project::new("Arbor")).await.unwrap();

        let projects = service.fetch_all_projects().await.unwrap();

        let ids: Vec<_> = projects.iter().map(|p| p.project_id).collect();
        assert_eq!(ids, vec![deck.project_id, fence.project_id, arbor.project_id]);
        let names: Vec<_> = projects.iter().map(|p| p.project_name.as_str()).collect();
        assert_eq!(names, vec!["Deck", "Fence", "Arbor"]);
    }

    #[tokio::test]
    async fn test_fetch_all_excludes_deleted_and_has_no_duplicates() {
        let (service, _repo) = service();
        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D"] {
            ids.push(service.add_project(Project::new(name)).await.unwrap().project_id.unwrap());
        }
        service.delete_project(ids[1]).await.unwrap();

        let projects = service.fetch_all_projects().await.unwrap();
        let fetched: Vec<i32> = projects.iter().filter_map(|p| p.project_id).collect();

        assert_eq!(fetched, vec![ids[0], ids[2], ids[3]]);
        assert!(fetched.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let (service, _repo) = service();
        assert!(service.fetch_all_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_sorts_extreme_ids() {
        let (service, repo) = service();
        // 用减法比较时 i32::MAX - i32::MIN 会溢出
        for id in [i32::MIN, -1, 0, i32::MAX] {
            repo.seed_with_id(id, Project::new(format!("project {id}")));
        }

        let projects = service.fetch_all_projects().await.unwrap();

        let ids: Vec<i32> = projects.iter().filter_map(|p| p.project_id).collect();
        assert_eq!(ids, vec![i32::MIN, -1, 0, i32::MAX]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_fetch_by_id_returns_details() {
        let (service, repo) = service();
        let id = repo.seed(detailed_project("Patio"));

        let project = service.fetch_project_by_id(id).await.unwrap();

        assert_eq!(project.project_id, Some(id));
        assert_eq!(project.project_name, "Patio");
        assert_eq!(project.materials.len(), 1);
        assert_eq!(project.steps.len(), 1);
        assert_eq!(project.categories[0].category_name, "Outdoor");
    }

    #[tokio::test]
    async fn test_fetch_by_id_not_found() {
        let (service, _repo) = service();

        let err = service.fetch_project_by_id(9999).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(9999)));
        assert_eq!(err.kind(), ServiceErrorKind::NotFound);
        assert!(err.to_string().contains("9999"));
    }

    #[tokio::test]
    async fn test_modify_existing_project() {
        let (service, _repo) = service();
        let mut project = service.add_project(Project::new("Deck")).await.unwrap();
        let id = project.project_id.unwrap();

        project.project_name = "Cedar deck".to_string();
        project.difficulty = Some(4);
        project.notes = None;
        service.modify_project_details(project).await.unwrap();

        let reloaded = service.fetch_project_by_id(id).await.unwrap();
        assert_eq!(reloaded.project_name, "Cedar deck");
        assert_eq!(reloaded.difficulty, Some(4));
        assert_eq!(reloaded.notes, None);
    }

    #[tokio::test]
    async fn test_modify_missing_project_leaves_store_unchanged() {
        let (service, repo) = service();
        service.add_project(Project::new("Deck")).await.unwrap();
        let before = repo.snapshot();

        let patio = Project {
            project_id: Some(5),
            ..Project::new("Patio")
        };
        let err = service.modify_project_details(patio).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::PreconditionFailed {
                id: 5,
                operation: ProjectOperation::Update
            }
        ));
        assert_eq!(err.kind(), ServiceErrorKind::PreconditionFailed);
        assert!(err.to_string().contains('5'));
        assert_eq!(repo.snapshot(), before);
    }

    #[tokio::test]
    async fn test_modify_without_id() {
        let (service, repo) = service();
        service.add_project(Project::new("Deck")).await.unwrap();
        let before = repo.snapshot();

        let err = service.modify_project_details(Project::new("Unsaved")).await.unwrap_err();

        assert!(matches!(err, ServiceError::MissingProjectId { .. }));
        assert_eq!(err.project_id(), None);
        assert_eq!(repo.snapshot(), before);
    }

    #[tokio::test]
    async fn test_delete_then_fetch_not_found() {
        let (service, _repo) = service();
        let id = service.add_project(Project::new("Fence")).await.unwrap().project_id.unwrap();

        service.delete_project(id).await.unwrap();

        let err = service.fetch_project_by_id(id).await.unwrap_err();
        assert_eq!(err.kind(), ServiceErrorKind::NotFound);
        assert_eq!(err.project_id(), Some(id));
    }

    #[tokio::test]
    async fn test_delete_missing_project() {
        let (service, _repo) = service();

        let err = service.delete_project(42).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::PreconditionFailed {
                id: 42,
                operation: ProjectOperation::Delete
            }
        ));
        assert!(err.to_string().contains("42"));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate_unchanged() {
        let service = ProjectService::new(FailingProjectRepository);

        let errors = vec![
            service.add_project(Project::new("Deck")).await.unwrap_err(),
            service.fetch_all_projects().await.unwrap_err(),
            service.fetch_project_by_id(1).await.unwrap_err(),
            service
                .modify_project_details(Project {
                    project_id: Some(1),
                    ..Project::new("Deck")
                })
                .await
                .unwrap_err(),
            service.delete_project(1).await.unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.kind(), ServiceErrorKind::Storage);
            assert!(matches!(err, ServiceError::Storage(DatabaseError::ConnectionError(_))));
        }
    }
}
