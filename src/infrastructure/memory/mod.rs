//! Memory Layer - In-Memory State Management
//!
//! 登录会话、账户目录与项目仓储的内存实现

mod account_directory;
mod project_repo;
mod session_manager;

pub use account_directory::InMemoryAccountDirectory;
pub use project_repo::InMemoryProjectRepository;
pub use session_manager::{spawn_session_sweeper, InMemorySessionManager};
