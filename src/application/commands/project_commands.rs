//! Project Commands

/// 创建项目命令
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// 删除项目命令
#[derive(Debug, Clone)]
pub struct DeleteProject {
    pub project_id: i64,
    pub requester_id: i64,
}
