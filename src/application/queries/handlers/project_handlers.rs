//! Project Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProjectFilter, ProjectPage, ProjectRepositoryPort};
use crate::application::queries::{GetProject, ListProjects};
use crate::domain::project::{OwnerId, Project, ProjectId};

/// GetProject Handler
pub struct GetProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl GetProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, query: GetProject) -> Result<Project, ApplicationError> {
        let id = ProjectId::new(query.project_id)?;
        self.project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("Project {} not found", id)))
    }
}

/// ListProjects Handler
pub struct ListProjectsHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl ListProjectsHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, query: ListProjects) -> Result<ProjectPage, ApplicationError> {
        let filter = ProjectFilter {
            owner: query.owner_id.map(OwnerId),
            offset: query.offset,
            limit: query.limit,
        };
        Ok(self.project_repo.find_page(filter).await?)
    }
}
