//! Ping Handler

use axum::extract::Request;
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::to_object;
use crate::infrastructure::http::json_response::{ViewMeta, ViewResult};
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub const PING: ViewMeta = ViewMeta::new("api_ping", "Health check; reports the gateway version.");

/// Ping endpoint - 健康检查
pub async fn ping(_request: Request, _state: Arc<AppState>) -> ViewResult {
    to_object(&PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
