//! Session Manager Port - 登录会话生命周期管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already exists: {0}")]
    AlreadyExists(String),

    #[error("Session expired: {0}")]
    Expired(String),
}

/// 登录会话（in-memory）
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            username: username.into(),
            created_at: now,
            last_activity: now,
        }
    }

    /// 距上次活动是否已超过 `idle_timeout_secs`
    pub fn is_idle(&self, idle_timeout_secs: u64, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.last_activity).num_seconds();
        u64::try_from(elapsed)
            .map(|secs| secs > idle_timeout_secs)
            .unwrap_or(false)
    }
}

/// Session Manager Port
///
/// 所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 获取会话
    fn get(&self, id: &str) -> Result<Session, SessionError>;

    /// 检查会话是否存在
    fn is_valid(&self, id: &str) -> bool;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 更新最后活动时间
    fn touch(&self, id: &str);

    /// 获取所有空闲超时会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 获取所有会话 ID
    fn list_all(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_session_is_not_idle() {
        let session = Session::new(1, "root");
        assert!(!session.is_idle(60, Utc::now()));
    }

    #[test]
    fn test_session_becomes_idle_after_timeout() {
        let mut session = Session::new(1, "root");
        session.last_activity = Utc::now() - Duration::seconds(120);
        assert!(session.is_idle(60, Utc::now()));
        assert!(!session.is_idle(600, Utc::now()));
    }
}
