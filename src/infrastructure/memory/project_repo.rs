//! In-Memory Project Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{ProjectFilter, ProjectPage, ProjectRepositoryPort, RepositoryError};
use crate::domain::project::{OwnerId, Project, ProjectId};

/// 内存项目仓储
pub struct InMemoryProjectRepository {
    projects: DashMap<ProjectId, Project>,
    next_id: AtomicI64,
    max_page_size: usize,
}

impl InMemoryProjectRepository {
    pub fn new(max_page_size: usize) -> Self {
        Self {
            projects: DashMap::new(),
            next_id: AtomicI64::new(1),
            max_page_size,
        }
    }
}

#[async_trait]
impl ProjectRepositoryPort for InMemoryProjectRepository {
    async fn next_id(&self) -> Result<ProjectId, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        ProjectId::new(id).map_err(|e| RepositoryError::Internal(e.to_string()))
    }

    async fn save(&self, project: &Project) -> Result<(), RepositoryError> {
        self.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        Ok(self.projects.get(&id).map(|p| p.clone()))
    }

    async fn find_page(&self, filter: ProjectFilter) -> Result<ProjectPage, RepositoryError> {
        if filter.limit > self.max_page_size {
            return Err(RepositoryError::ApiUsage(format!(
                "limit {} exceeds maximum page size {}",
                filter.limit, self.max_page_size
            )));
        }

        let mut matching: Vec<Project> = self
            .projects
            .iter()
            .filter(|entry| filter.owner.map_or(true, |owner| entry.is_owned_by(owner)))
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by_key(|p| p.id());

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect();

        Ok(ProjectPage { items, total })
    }

    async fn delete(&self, id: ProjectId, requester: OwnerId) -> Result<Project, RepositoryError> {
        // 检查与删除在同一个 entry 锁内完成
        match self.projects.entry(id) {
            dashmap::mapref::entry::Entry::Vacant(_) => {
                Err(RepositoryError::NotFound(format!("Project {} not found", id)))
            }
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                if !entry.get().is_owned_by(requester) {
                    return Err(RepositoryError::SecurityViolation(format!(
                        "User {} cannot delete Project {} owned by {}",
                        requester,
                        id,
                        entry.get().owner_id()
                    )));
                }
                Ok(entry.remove())
            }
        }
    }
}
