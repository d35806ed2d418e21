//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（ProjectRepository、SessionManager、AccountDirectory）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 视图可返回的错误种类

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{
        CreateProjectHandler, DeleteProjectHandler, LoginHandler, LoginResponse, LogoutHandler,
    },
    CreateProject, DeleteProject, Login, Logout,
};

pub use error::{ApplicationError, JsonObject};

pub use ports::{
    AccountDirectoryPort, ProjectFilter, ProjectPage, ProjectRepositoryPort, RepositoryError,
    Session, SessionError, SessionManagerPort, UserAccount,
};

pub use queries::{
    handlers::{GetProjectHandler, ListProjectsHandler},
    GetProject, ListProjects,
};
