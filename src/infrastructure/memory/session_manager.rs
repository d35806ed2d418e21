//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let session_id = session.id.clone();
        if self.sessions.contains_key(&session_id) {
            return Err(SessionError::AlreadyExists(session_id));
        }
        let user_id = session.user_id;
        self.sessions.insert(session_id.clone(), session);
        tracing::info!(session_id = %session_id, user_id = user_id, "Session created");
        Ok(session_id)
    }

    fn get(&self, id: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn is_valid(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    fn close(&self, id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|_| {
                tracing::info!(session_id = %id, "Session closed");
            })
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn touch(&self, id: &str) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.last_activity = Utc::now();
        }
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        self.sessions
            .iter()
            .filter(|entry| entry.is_idle(idle_timeout_secs, now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn list_all(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}

/// 启动后台任务，按固定间隔关闭空闲超时的会话
pub fn spawn_session_sweeper(
    sessions: Arc<dyn SessionManagerPort>,
    interval_secs: u64,
    idle_timeout_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;
            let expired = sessions.get_expired_sessions(idle_timeout_secs);
            if expired.is_empty() {
                continue;
            }
            for id in &expired {
                match sessions.close(id) {
                    Ok(()) => {}
                    // 已被请求路径上的登录检查关闭
                    Err(SessionError::NotFound(_)) => {
                        tracing::debug!(session_id = %id, "Expired session already closed");
                    }
                    Err(e) => {
                        tracing::warn!(session_id = %id, error = %e, "Failed to close expired session");
                    }
                }
            }
            tracing::info!(count = expired.len(), "Expired sessions swept");
        }
    })
}
