//! Auth Command Handlers

use std::sync::Arc;

use crate::application::commands::{Login, Logout};
use crate::application::error::ApplicationError;
use crate::application::ports::{AccountDirectoryPort, Session, SessionManagerPort};

// ============================================================================
// Login
// ============================================================================

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub session_id: String,
    pub user_id: i64,
    pub username: String,
}

/// Login Handler
pub struct LoginHandler {
    accounts: Arc<dyn AccountDirectoryPort>,
    sessions: Arc<dyn SessionManagerPort>,
}

impl LoginHandler {
    pub fn new(accounts: Arc<dyn AccountDirectoryPort>, sessions: Arc<dyn SessionManagerPort>) -> Self {
        Self { accounts, sessions }
    }

    pub async fn handle(&self, command: Login) -> Result<LoginResponse, ApplicationError> {
        let username = command.username.trim();
        if username.is_empty() {
            return Err(ApplicationError::bad_request("username is required"));
        }

        let account = self
            .accounts
            .find_by_username(username)
            .filter(|account| account.password == command.password)
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Login failed");
                ApplicationError::security_violation("Login failed: invalid username or password")
            })?;

        let session_id = self
            .sessions
            .create(Session::new(account.id, account.username.clone()))?;

        tracing::info!(user_id = account.id, username = %account.username, "User logged in");

        Ok(LoginResponse {
            session_id,
            user_id: account.id,
            username: account.username,
        })
    }
}

// ============================================================================
// Logout
// ============================================================================

/// Logout Handler
pub struct LogoutHandler {
    sessions: Arc<dyn SessionManagerPort>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionManagerPort>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, command: Logout) -> Result<(), ApplicationError> {
        self.sessions.close(&command.session_id)?;
        tracing::info!(session_id = %command.session_id, "User logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::UserAccount;
    use crate::infrastructure::memory::{InMemoryAccountDirectory, InMemorySessionManager};

    fn handler() -> (LoginHandler, Arc<InMemorySessionManager>) {
        let accounts = Arc::new(InMemoryAccountDirectory::new(vec![UserAccount {
            id: 2,
            username: "root".to_string(),
            password: "omero".to_string(),
        }]));
        let sessions = Arc::new(InMemorySessionManager::new());
        (LoginHandler::new(accounts, sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn test_login_creates_session() {
        let (handler, sessions) = handler();
        let response = handler
            .handle(Login {
                username: "root".to_string(),
                password: "omero".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user_id, 2);
        assert!(sessions.is_valid(&response.session_id));
    }

    #[tokio::test]
    async fn test_wrong_password_is_security_violation() {
        let (handler, sessions) = handler();
        let err = handler
            .handle(Login {
                username: "root".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::SecurityViolation(_)));
        assert!(sessions.list_all().is_empty());
    }

    #[tokio::test]
    async fn test_blank_username_is_bad_request() {
        let (handler, _) = handler();
        let err = handler
            .handle(Login {
                username: "  ".to_string(),
                password: "omero".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_logout_unknown_session_is_not_found() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let err = LogoutHandler::new(sessions)
            .handle(Logout {
                session_id: "missing".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
