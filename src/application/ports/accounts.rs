//! Account Directory Port
//!
//! 登录时查找账户

/// 可登录账户
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub trait AccountDirectoryPort: Send + Sync {
    /// 按用户名查找账户
    fn find_by_username(&self, username: &str) -> Option<UserAccount>;
}
