//! HTTP Handlers
//!
//! 所有视图均为 `async fn(Request, Arc<AppState>) -> ViewResult`，
//! 由 `json_response` 包装后注册到路由。

mod auth;
mod index;
mod ping;
mod project;

pub use auth::*;
pub use index::*;
pub use ping::*;
pub use project::*;

use axum::{
    extract::{Path, Request},
    RequestExt,
};
use serde::de::DeserializeOwned;

use crate::application::ApplicationError;
use crate::infrastructure::http::auth::Principal;

/// JSON 请求体上限
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 读取登录检查写入的用户
fn principal(request: &Request) -> Result<Principal, ApplicationError> {
    request
        .extensions()
        .get::<Principal>()
        .cloned()
        .ok_or_else(|| ApplicationError::internal("view requires the login gate"))
}

/// 解析 JSON 请求体
async fn read_json<T: DeserializeOwned>(request: Request) -> Result<T, ApplicationError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApplicationError::bad_request(format!("Failed to read request body: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApplicationError::bad_request(format!("Invalid JSON body: {}", e)))
}

/// 解析路径中的对象 ID
async fn path_id(request: &mut Request) -> Result<i64, ApplicationError> {
    let Path(id) = request
        .extract_parts::<Path<i64>>()
        .await
        .map_err(|e| ApplicationError::bad_request(e.body_text()))?;
    Ok(id)
}
