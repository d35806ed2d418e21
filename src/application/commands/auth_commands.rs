//! Auth Commands

/// 登录命令
#[derive(Debug, Clone)]
pub struct Login {
    pub username: String,
    pub password: String,
}

/// 登出命令
#[derive(Debug, Clone)]
pub struct Logout {
    pub session_id: String,
}
