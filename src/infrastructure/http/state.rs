//! Application State
//!
//! 所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateProjectHandler, DeleteProjectHandler, LoginHandler, LogoutHandler,
    // Query handlers
    GetProjectHandler, ListProjectsHandler,
    // Ports
    AccountDirectoryPort, ProjectRepositoryPort, SessionManagerPort,
};
use crate::config::ApiConfig;

/// 应用状态
pub struct AppState {
    // ========== Config ==========
    pub api: ApiConfig,

    // ========== Command Handlers ==========
    pub login_handler: LoginHandler,
    pub logout_handler: LogoutHandler,
    pub create_project_handler: CreateProjectHandler,
    pub delete_project_handler: DeleteProjectHandler,

    // ========== Query Handlers ==========
    pub get_project_handler: GetProjectHandler,
    pub list_projects_handler: ListProjectsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        sessions: Arc<dyn SessionManagerPort>,
        accounts: Arc<dyn AccountDirectoryPort>,
        project_repo: Arc<dyn ProjectRepositoryPort>,
        api: ApiConfig,
    ) -> Self {
        Self {
            api,

            login_handler: LoginHandler::new(accounts, sessions.clone()),
            logout_handler: LogoutHandler::new(sessions),
            create_project_handler: CreateProjectHandler::new(project_repo.clone()),
            delete_project_handler: DeleteProjectHandler::new(project_repo.clone()),

            get_project_handler: GetProjectHandler::new(project_repo.clone()),
            list_projects_handler: ListProjectsHandler::new(project_repo),
        }
    }
}
