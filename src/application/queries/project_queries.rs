//! Project Queries

/// 获取项目详情查询
#[derive(Debug, Clone)]
pub struct GetProject {
    pub project_id: i64,
}

/// 分页列出项目查询
#[derive(Debug, Clone)]
pub struct ListProjects {
    pub owner_id: Option<i64>,
    pub offset: usize,
    pub limit: usize,
}
