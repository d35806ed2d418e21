//! HTTP Error Handling
//!
//! 把 `ApplicationError` 映射为 JSON 响应：
//!
//! | 错误种类 | 状态码 |
//! |---|---|
//! | NotFound | 错误携带的值 |
//! | BadRequest | 错误携带的值，stacktrace 替换为错误自身携带的（可能为空） |
//! | SecurityViolation | 403 |
//! | ApiUsage | 400 |
//! | CreatedObject | 错误携带的值，响应体为错误携带的对象 |
//! | 其他 | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stacktrace: None,
        }
    }

    /// 设置 stacktrace，空字符串视为无
    pub fn with_stacktrace(mut self, stacktrace: Option<String>) -> Self {
        self.stacktrace = stacktrace.filter(|t| !t.is_empty());
        self
    }
}

/// 仅含 `message` 的 JSON 响应
pub fn json_message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// 解析错误对应的状态码与响应体
pub fn resolve(err: ApplicationError) -> (StatusCode, Value) {
    let mut status = StatusCode::INTERNAL_SERVER_ERROR;
    let mut trace = Some(format_trace(&err));

    match &err {
        ApplicationError::NotFound { status: carried, .. } => {
            status = *carried;
        }
        ApplicationError::BadRequest {
            status: carried,
            stacktrace,
            ..
        } => {
            status = *carried;
            trace = stacktrace.clone();
        }
        ApplicationError::SecurityViolation(_) => {
            status = StatusCode::FORBIDDEN;
        }
        ApplicationError::ApiUsage(_) => {
            status = StatusCode::BAD_REQUEST;
        }
        ApplicationError::CreatedObject { .. } | ApplicationError::Internal(_) => {}
    }

    tracing::debug!(trace = trace.as_deref().unwrap_or_default(), "json_response error");

    if let ApplicationError::CreatedObject { status, response } = err {
        return (status, Value::Object(response));
    }

    let body = ErrorResponse::new(err.to_string()).with_stacktrace(trace);
    let body = serde_json::to_value(body).unwrap_or_else(|_| Value::Object(Default::default()));
    (status, body)
}

/// 错误的可读 trace：种类、消息以及 `source()` 链
///
/// `Internal` 使用 anyhow 的 Debug 输出，捕获了 backtrace 时会一并包含
pub fn format_trace(err: &ApplicationError) -> String {
    let detail = match err {
        ApplicationError::Internal(inner) => format!("{:?}", inner),
        other => error_chain(other),
    };
    format!("{}: {}", kind_name(err), detail)
}

fn kind_name(err: &ApplicationError) -> &'static str {
    match err {
        ApplicationError::NotFound { .. } => "NotFoundError",
        ApplicationError::BadRequest { .. } => "BadRequestError",
        ApplicationError::SecurityViolation(_) => "SecurityViolation",
        ApplicationError::ApiUsage(_) => "ApiUsageException",
        ApplicationError::CreatedObject { .. } => "CreatedObject",
        ApplicationError::Internal(_) => "InternalError",
    }
}

fn error_chain(err: &dyn StdError) -> String {
    let mut trace = err.to_string();
    let mut source = err.source();
    if source.is_some() {
        trace.push_str("\n\nCaused by:");
    }
    let mut index = 0;
    while let Some(cause) = source {
        trace.push_str(&format!("\n    {}: {}", index, cause));
        index += 1;
        source = cause.source();
    }
    trace
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = resolve(self);
        (status, Json(body)).into_response()
    }
}
