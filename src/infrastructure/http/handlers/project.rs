//! Project HTTP Handlers

use axum::extract::{Query, Request};
use std::sync::Arc;

use crate::application::{ApplicationError, CreateProject, DeleteProject, GetProject, ListProjects};
use crate::infrastructure::http::dto::{
    to_object, CreateProjectRequest, DataResponse, ListResponse, ProjectDto, ProjectListParams,
};
use crate::infrastructure::http::json_response::{ViewMeta, ViewResult};
use crate::infrastructure::http::state::AppState;

use super::{path_id, principal, read_json};

pub const LIST_PROJECTS: ViewMeta = ViewMeta::new(
    "api_projects",
    "List projects. Query: offset, limit, owner.",
);

pub const CREATE_PROJECT: ViewMeta = ViewMeta::new(
    "api_project_create",
    "Create a project owned by the current user; returns 201.",
);

pub const GET_PROJECT: ViewMeta = ViewMeta::new("api_project", "Get a single project by id.");

pub const DELETE_PROJECT: ViewMeta = ViewMeta::new(
    "api_project_delete",
    "Delete a project owned by the current user; returns the deleted project.",
);

/// 列出项目
pub async fn list_projects(request: Request, state: Arc<AppState>) -> ViewResult {
    let Query(params) = Query::<ProjectListParams>::try_from_uri(request.uri())
        .map_err(|e| ApplicationError::bad_request(e.body_text()))?;

    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(state.api.default_limit);

    let page = state
        .list_projects_handler
        .handle(ListProjects {
            owner_id: params.owner,
            offset,
            limit,
        })
        .await?;

    to_object(&ListResponse::from_page(&page, offset, limit, state.api.max_limit))
}

/// 创建项目
pub async fn create_project(request: Request, state: Arc<AppState>) -> ViewResult {
    let principal = principal(&request)?;
    let body: CreateProjectRequest = read_json(request).await?;

    let project = state
        .create_project_handler
        .handle(CreateProject {
            owner_id: principal.user_id,
            name: body.name,
            description: body.description,
        })
        .await?;

    Err(ApplicationError::created(to_object(&DataResponse {
        data: ProjectDto::from(&project),
    })?))
}

/// 获取项目
pub async fn get_project(mut request: Request, state: Arc<AppState>) -> ViewResult {
    let project_id = path_id(&mut request).await?;
    let project = state
        .get_project_handler
        .handle(GetProject { project_id })
        .await?;

    to_object(&DataResponse {
        data: ProjectDto::from(&project),
    })
}

/// 删除项目
pub async fn delete_project(mut request: Request, state: Arc<AppState>) -> ViewResult {
    let principal = principal(&request)?;
    let project_id = path_id(&mut request).await?;
    let project = state
        .delete_project_handler
        .handle(DeleteProject {
            project_id,
            requester_id: principal.user_id,
        })
        .await?;

    to_object(&DataResponse {
        data: ProjectDto::from(&project),
    })
}
