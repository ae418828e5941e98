//! 项目相关接口
//!
//! 所有接口都只做参数校验和模型转换，业务逻辑在 [`ProjectServiceTrait`](crate::services::ProjectServiceTrait) 中。

use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::projects::{ProjectDetail, ProjectInfo, ProjectPayload};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, instrument};
use validator::Validate;

/// 获取全部项目
///
/// 返回所有项目的概要信息，按项目ID升序排列，不分页。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects ordered by id", body = ReplyList<ProjectInfo>)
    ),
)]
#[instrument(skip(state))]
pub async fn find_projects(State(state): State<AppState>) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    let projects = state.project_service.fetch_all_projects().await?;
    debug!("✅ 查询到 {} 个项目", projects.len());

    let data = projects
        .into_iter()
        .map(ProjectInfo::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(data.into()))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，请求体中的数据会先经过 [`Validate`] 校验。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Create project result", body = Reply<ProjectDetail>),
        (status = 400, description = "Invalid request body")
    )
)]
#[instrument(skip(state))]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Reply<ProjectDetail>>), AppError> {
    payload.validate()?;

    let project = state.project_service.add_project(payload.into_project(None)).await?;
    debug!("✅ 项目创建成功: {:?}", project.project_id);

    Ok((StatusCode::CREATED, Json(Reply { data: project.try_into()? })))
}

/// 查询指定项目详情
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project with materials, steps and categories", body = Reply<ProjectDetail>),
        (status = 404, description = "Project not found")
    )
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<Reply<ProjectDetail>>, AppError> {
    let project = state.project_service.fetch_project_by_id(project_id).await?;

    Ok(Json(Reply { data: project.try_into()? }))
}

/// 更新项目信息
///
/// 使用请求体整体替换项目 `id` 的信息，未提供的可选字段会被清空。
#[utoipa::path(put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    request_body = ProjectPayload,
    responses(
        (status = 204, description = "Project updated"),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Project not found")
    )
)]
#[instrument(skip(state))]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(payload): Json<ProjectPayload>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .project_service
        .modify_project_details(payload.into_project(Some(project_id)))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 删除指定的项目
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
#[instrument(skip(state))]
pub async fn delete_project(State(state): State<AppState>, Path(project_id): Path<i32>) -> Result<StatusCode, AppError> {
    state.project_service.delete_project(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
