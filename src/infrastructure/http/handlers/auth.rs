//! Login / Logout Handlers

use axum::extract::Request;
use std::sync::Arc;

use crate::application::{ApplicationError, Login, Logout};
use crate::infrastructure::http::dto::{to_object, LoginRequest, LoginResponseDto};
use crate::infrastructure::http::json_response::{ViewMeta, ViewResult};
use crate::infrastructure::http::state::AppState;

use super::{principal, read_json};

pub const LOGIN: ViewMeta = ViewMeta::new(
    "api_login",
    "Create a session from username and password; returns 201 with the session id.",
);

pub const LOGOUT: ViewMeta = ViewMeta::new("api_logout", "Close the current session.");

/// 登录
pub async fn login(request: Request, state: Arc<AppState>) -> ViewResult {
    let body: LoginRequest = read_json(request).await?;
    let response = state
        .login_handler
        .handle(Login {
            username: body.username,
            password: body.password,
        })
        .await?;

    Err(ApplicationError::created(to_object(&LoginResponseDto::from(response))?))
}

/// 登出
pub async fn logout(request: Request, state: Arc<AppState>) -> ViewResult {
    let principal = principal(&request)?;
    state
        .logout_handler
        .handle(Logout {
            session_id: principal.session_id,
        })
        .await?;

    to_object(&serde_json::json!({"success": true}))
}
