//! Login Gate
//!
//! `LoginRequired` 检查请求是否携带有效会话；未登录时交给 `OnNotLoggedIn`
//! 钩子生成响应。默认钩子跳转到登录页，JSON API 使用 `JsonNotLoggedIn`
//! 返回 403。

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::application::ports::{SessionError, SessionManagerPort};
use crate::infrastructure::http::error::json_message;

/// 已登录用户，由登录检查写入请求 extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub session_id: String,
}

/// 未登录时的响应钩子
pub trait OnNotLoggedIn: Send + Sync {
    /// `url` 为登录页地址（含原请求路径），`error` 为会话检查失败的原因
    fn on_not_logged_in(&self, request: &Request, url: &str, error: Option<&str>) -> Response;
}

/// 默认实现：302 跳转到登录页
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectToLogin;

impl OnNotLoggedIn for RedirectToLogin {
    fn on_not_logged_in(&self, _request: &Request, url: &str, _error: Option<&str>) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
    }
}

/// JSON API 实现：403 `{"message": "Not logged in"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonNotLoggedIn;

impl OnNotLoggedIn for JsonNotLoggedIn {
    fn on_not_logged_in(&self, _request: &Request, _url: &str, _error: Option<&str>) -> Response {
        json_message(StatusCode::FORBIDDEN, "Not logged in")
    }
}

/// 登录检查
#[derive(Clone)]
pub struct LoginRequired {
    sessions: Arc<dyn SessionManagerPort>,
    hook: Arc<dyn OnNotLoggedIn>,
    login_url: String,
    session_cookie: String,
    idle_timeout_secs: u64,
}

impl LoginRequired {
    pub fn new(
        sessions: Arc<dyn SessionManagerPort>,
        login_url: impl Into<String>,
        session_cookie: impl Into<String>,
        idle_timeout_secs: u64,
    ) -> Self {
        Self {
            sessions,
            hook: Arc::new(RedirectToLogin),
            login_url: login_url.into(),
            session_cookie: session_cookie.into(),
            idle_timeout_secs,
        }
    }

    /// 替换未登录钩子
    pub fn with_hook(mut self, hook: Arc<dyn OnNotLoggedIn>) -> Self {
        self.hook = hook;
        self
    }

    /// 使用 JSON 403 钩子
    pub fn json(self) -> Self {
        self.with_hook(Arc::new(JsonNotLoggedIn))
    }

    /// 登录页地址，附带原请求路径
    pub fn login_url_for(&self, request: &Request) -> String {
        let next = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        format!("{}?url={}", self.login_url, urlencoding::encode(next))
    }

    /// 校验会话，失败时返回传给钩子的错误描述
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, Option<String>> {
        let Some(session_id) = session_id_from_headers(headers, &self.session_cookie) else {
            return Err(None);
        };

        let session = self.sessions.get(&session_id).map_err(|e| match e {
            SessionError::NotFound(_) => Some("Session not found".to_string()),
            other => Some(other.to_string()),
        })?;

        if session.is_idle(self.idle_timeout_secs, Utc::now()) {
            match self.sessions.close(&session_id) {
                Ok(()) => {}
                Err(SessionError::NotFound(_)) => {
                    tracing::debug!(session_id = %session_id, "Expired session already closed");
                }
                Err(e) => {
                    tracing::warn!(session_id = %session_id, error = %e, "Failed to close expired session");
                }
            }
            tracing::info!(session_id = %session_id, "Session expired");
            return Err(Some("Session expired".to_string()));
        }

        self.sessions.touch(&session_id);
        Ok(Principal {
            user_id: session.user_id,
            username: session.username,
            session_id,
        })
    }

    fn not_logged_in(&self, request: &Request, error: Option<&str>) -> Response {
        let url = self.login_url_for(request);
        tracing::debug!(
            uri = %request.uri(),
            error = error.unwrap_or_default(),
            "Not logged in"
        );
        self.hook.on_not_logged_in(request, &url, error)
    }
}

/// 登录检查中间件
///
/// 用法：`axum::middleware::from_fn_with_state(gate, login_required)`
pub async fn login_required(
    State(gate): State<LoginRequired>,
    mut request: Request,
    next: Next,
) -> Response {
    match gate.authenticate(request.headers()) {
        Ok(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(error) => gate.not_logged_in(&request, error.as_deref()),
    }
}

/// 从 cookie 或 `Authorization: Bearer` 中读取会话 ID
fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|id| !id.is_empty());

    from_cookie.or_else(|| bearer_token(headers))
}

/// `Authorization: Bearer <token>`，scheme 不区分大小写
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim().to_string()).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Session;
    use crate::infrastructure::memory::InMemorySessionManager;
    use axum::{body::Body, routing::get, Extension, Router};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn whoami(Extension(principal): Extension<Principal>) -> String {
        principal.username
    }

    fn app(gate: LoginRequired) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(gate, login_required))
    }

    fn gate(sessions: Arc<InMemorySessionManager>) -> LoginRequired {
        LoginRequired::new(sessions, "/webclient/login/", "sessionid", 60)
    }

    #[tokio::test]
    async fn test_json_hook_always_403_not_logged_in() {
        let request = Request::new(Body::empty());
        for (url, error) in [
            ("/webclient/login/", None),
            ("", Some("Session expired")),
            ("/login?url=%2Fapi", Some("")),
        ] {
            let response = JsonNotLoggedIn.on_not_logged_in(&request, url, error);
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            assert_eq!(body_json(response).await, json!({"message": "Not logged in"}));
        }
    }

    #[tokio::test]
    async fn test_redirect_hook_is_default() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let response = app(gate(sessions))
            .oneshot(
                axum::http::Request::builder()
                    .uri("/whoami?x=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/webclient/login/?url=%2Fwhoami%3Fx%3D1"
        );
    }

    #[tokio::test]
    async fn test_json_gate_without_session_is_403() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let response = app(gate(sessions).json())
            .oneshot(axum::http::Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await, json!({"message": "Not logged in"}));
    }

    #[tokio::test]
    async fn test_valid_cookie_reaches_handler() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let session_id = sessions.create(Session::new(4, "ola")).unwrap();

        let response = app(gate(sessions).json())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("csrftoken=abc; sessionid={}", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ola");
    }

    #[tokio::test]
    async fn test_bearer_token_is_accepted() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let session_id = sessions.create(Session::new(4, "ola")).unwrap();

        let principal = gate(sessions)
            .authenticate(&{
                let mut headers = HeaderMap::new();
                headers.insert(
                    header::AUTHORIZATION,
                    format!("Bearer {}", session_id).parse().unwrap(),
                );
                headers
            })
            .unwrap();

        assert_eq!(principal.user_id, 4);
        assert_eq!(principal.session_id, session_id);
    }

    #[tokio::test]
    async fn test_unknown_session_reports_error() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "sessionid=missing".parse().unwrap());

        let err = gate(sessions).authenticate(&headers).unwrap_err();
        assert_eq!(err.as_deref(), Some("Session not found"));
    }

    #[tokio::test]
    async fn test_idle_session_is_closed() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let mut stale = Session::new(4, "ola");
        stale.last_activity = Utc::now() - chrono::Duration::seconds(120);
        let session_id = sessions.create(stale).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("sessionid={}", session_id).parse().unwrap(),
        );

        let err = gate(sessions.clone()).authenticate(&headers).unwrap_err();
        assert_eq!(err.as_deref(), Some("Session expired"));
        assert!(!sessions.is_valid(&session_id));
    }

    /// 会话在读取之后、关闭之前已被清理任务移除
    struct SweptConcurrently(Session);

    impl SessionManagerPort for SweptConcurrently {
        fn create(&self, session: Session) -> Result<String, SessionError> {
            Ok(session.id)
        }
        fn get(&self, _id: &str) -> Result<Session, SessionError> {
            Ok(self.0.clone())
        }
        fn is_valid(&self, _id: &str) -> bool {
            false
        }
        fn close(&self, id: &str) -> Result<(), SessionError> {
            Err(SessionError::NotFound(id.to_string()))
        }
        fn touch(&self, _id: &str) {}
        fn get_expired_sessions(&self, _idle_timeout_secs: u64) -> Vec<String> {
            Vec::new()
        }
        fn list_all(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_idle_session_already_swept_still_reports_expired() {
        let mut stale = Session::new(4, "ola");
        stale.last_activity = Utc::now() - chrono::Duration::seconds(120);
        let session_id = stale.id.clone();
        let gate = LoginRequired::new(
            Arc::new(SweptConcurrently(stale)),
            "/webclient/login/",
            "sessionid",
            60,
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("sessionid={}", session_id).parse().unwrap(),
        );

        let err = gate.authenticate(&headers).unwrap_err();
        assert_eq!(err.as_deref(), Some("Session expired"));
    }

    #[test]
    fn test_empty_cookie_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "sessionid=".parse().unwrap());
        assert!(session_id_from_headers(&headers, "sessionid").is_none());
    }

    #[tokio::test]
    async fn test_empty_cookie_falls_back_to_bearer() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let session_id = sessions.create(Session::new(4, "ola")).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "sessionid=".parse().unwrap());
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", session_id).parse().unwrap(),
        );

        let principal = gate(sessions).authenticate(&headers).unwrap();
        assert_eq!(principal.session_id, session_id);
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for scheme in ["bearer", "BEARER", "Bearer"] {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::AUTHORIZATION,
                format!("{} abc123", scheme).parse().unwrap(),
            );
            assert_eq!(
                session_id_from_headers(&headers, "sessionid").as_deref(),
                Some("abc123")
            );
        }
    }

    #[test]
    fn test_other_auth_schemes_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic cm9vdDpvbWVybw==".parse().unwrap());
        assert!(session_id_from_headers(&headers, "sessionid").is_none());

        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert!(session_id_from_headers(&headers, "sessionid").is_none());
    }
}
