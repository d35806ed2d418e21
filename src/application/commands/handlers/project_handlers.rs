//! Project Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateProject, DeleteProject};
use crate::application::error::ApplicationError;
use crate::application::ports::ProjectRepositoryPort;
use crate::domain::project::{OwnerId, Project, ProjectId, ProjectName};

// ============================================================================
// CreateProject
// ============================================================================

/// CreateProject Handler
pub struct CreateProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl CreateProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, command: CreateProject) -> Result<Project, ApplicationError> {
        let name = ProjectName::new(command.name)?;
        let id = self.project_repo.next_id().await?;
        let project = Project::new(id, name, command.description, OwnerId(command.owner_id));

        self.project_repo.save(&project).await?;

        tracing::info!(
            project_id = %project.id(),
            owner_id = command.owner_id,
            name = %project.name(),
            "Project created"
        );

        Ok(project)
    }
}

// ============================================================================
// DeleteProject
// ============================================================================

/// DeleteProject Handler
pub struct DeleteProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl DeleteProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, command: DeleteProject) -> Result<Project, ApplicationError> {
        let id = ProjectId::new(command.project_id)?;
        let project = self
            .project_repo
            .delete(id, OwnerId(command.requester_id))
            .await?;

        tracing::info!(project_id = %id, requester_id = command.requester_id, "Project deleted");

        Ok(project)
    }
}
