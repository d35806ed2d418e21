//! Repository Ports - 出站端口
//!
//! 项目仓储的抽象接口。错误族模拟对象服务器 RPC 客户端抛出的异常：
//! 未找到、权限不足、API 用法错误与其他内部错误。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::project::{OwnerId, Project, ProjectId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    SecurityViolation(String),

    #[error("{0}")]
    ApiUsage(String),

    #[error("Repository failure: {0}")]
    Internal(String),
}

/// 列表查询条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFilter {
    pub owner: Option<OwnerId>,
    pub offset: usize,
    pub limit: usize,
}

/// 一页查询结果
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    /// 过滤后（分页前）的总数
    pub total: usize,
}

/// Project Repository Port
#[async_trait]
pub trait ProjectRepositoryPort: Send + Sync {
    /// 分配下一个项目 ID
    async fn next_id(&self) -> Result<ProjectId, RepositoryError>;

    /// 保存项目
    async fn save(&self, project: &Project) -> Result<(), RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError>;

    /// 分页查询，按 ID 升序
    ///
    /// `limit` 超过仓储允许的最大值时返回 `ApiUsage`
    async fn find_page(&self, filter: ProjectFilter) -> Result<ProjectPage, RepositoryError>;

    /// 删除项目并返回被删除的实体
    ///
    /// 仅所有者可删除，否则返回 `SecurityViolation`
    async fn delete(&self, id: ProjectId, requester: OwnerId) -> Result<Project, RepositoryError>;
}
