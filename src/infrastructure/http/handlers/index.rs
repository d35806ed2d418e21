//! API Index Handler
//!
//! 列出所有已注册视图的名称、文档与路径

use axum::extract::Request;
use serde::Serialize;
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::infrastructure::http::dto::to_object;
use crate::infrastructure::http::json_response::{ViewMeta, ViewResult};
use crate::infrastructure::http::state::AppState;

/// 路由表中的一条视图记录
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
    #[serde(flatten)]
    pub meta: ViewMeta,
}

/// 路由表，作为 Extension 注入
#[derive(Debug, Clone)]
pub struct ApiIndex(pub Arc<Vec<RouteEntry>>);

#[derive(Serialize)]
struct IndexResponse<'a> {
    views: &'a [RouteEntry],
}

pub const API_INDEX: ViewMeta = ViewMeta::new("api_index", "List every JSON view with its method and path.");

pub async fn api_index(request: Request, _state: Arc<AppState>) -> ViewResult {
    let index = request
        .extensions()
        .get::<ApiIndex>()
        .ok_or_else(|| ApplicationError::internal("API index is not installed"))?;
    to_object(&IndexResponse {
        views: index.0.as_slice(),
    })
}
