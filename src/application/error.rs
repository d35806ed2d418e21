//! 应用层错误定义
//!
//! JSON 视图可返回的错误种类。`infrastructure::http::error` 负责把每一种
//! 映射为 HTTP 状态码和 JSON 响应体。

use http::StatusCode;
use thiserror::Error;

use crate::application::ports::{RepositoryError, SessionError};
use crate::domain::project::ProjectError;

/// JSON 对象（视图成功时的返回值）
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// 应用层错误
///
/// `CreatedObject` 不是错误：它携带一个成功响应（通常是 201），
/// 允许深层调用用 `?` 直接结束请求。
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到，状态码由错误自身携带（默认 404）
    #[error("{message}")]
    NotFound { message: String, status: StatusCode },

    /// 请求无效，状态码与可选的 stacktrace 由错误自身携带
    #[error("{message}")]
    BadRequest {
        message: String,
        status: StatusCode,
        stacktrace: Option<String>,
    },

    /// 权限不足
    #[error("{0}")]
    SecurityViolation(String),

    /// API 调用方式错误
    #[error("{0}")]
    ApiUsage(String),

    /// 对象已创建
    #[error("Created object")]
    CreatedObject {
        status: StatusCode,
        response: JsonObject,
    },

    /// 其他错误
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApplicationError {
    /// 创建 NotFound 错误（404）
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// 创建带自定义状态码的 NotFound 错误
    pub fn not_found_with_status(message: impl Into<String>, status: StatusCode) -> Self {
        Self::NotFound {
            message: message.into(),
            status,
        }
    }

    /// 创建 BadRequest 错误（400，无 stacktrace）
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
            stacktrace: None,
        }
    }

    /// 创建带自定义状态码和 stacktrace 的 BadRequest 错误
    pub fn bad_request_with(
        message: impl Into<String>,
        status: StatusCode,
        stacktrace: Option<String>,
    ) -> Self {
        Self::BadRequest {
            message: message.into(),
            status,
            stacktrace,
        }
    }

    pub fn security_violation(message: impl Into<String>) -> Self {
        Self::SecurityViolation(message.into())
    }

    pub fn api_usage(message: impl Into<String>) -> Self {
        Self::ApiUsage(message.into())
    }

    /// 创建 201 Created 信号
    pub fn created(response: JsonObject) -> Self {
        Self::CreatedObject {
            status: StatusCode::CREATED,
            response,
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::not_found(msg),
            RepositoryError::SecurityViolation(msg) => Self::SecurityViolation(msg),
            RepositoryError::ApiUsage(msg) => Self::ApiUsage(msg),
            other @ RepositoryError::Internal(_) => Self::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<SessionError> for ApplicationError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => Self::not_found(err.to_string()),
            SessionError::Expired(_) => Self::SecurityViolation(err.to_string()),
            SessionError::AlreadyExists(_) => Self::Internal(anyhow::Error::new(err)),
        }
    }
}

impl From<ProjectError> for ApplicationError {
    fn from(err: ProjectError) -> Self {
        Self::bad_request(err.to_string())
    }
}
