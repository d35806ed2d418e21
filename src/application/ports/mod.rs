//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod accounts;
mod repositories;
mod session_manager;

pub use accounts::{AccountDirectoryPort, UserAccount};
pub use repositories::{ProjectFilter, ProjectPage, ProjectRepositoryPort, RepositoryError};
pub use session_manager::{Session, SessionError, SessionManagerPort};
