//! JSON View Wrapper
//!
//! `json_response` 把返回 `ViewResult` 的视图函数包装为 axum handler：
//! - 成功：返回值序列化为 JSON，状态码 200
//! - 失败：错误经 `error::resolve` 映射为状态码与 JSON 响应体
//! - panic：视为未分类错误（500）
//!
//! 包装后的 `JsonView` 保留视图的名称与文档，供路由表和 API 索引使用。

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;

use axum::{
    extract::Request,
    handler::Handler,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::FutureExt;
use serde::Serialize;

use crate::application::{ApplicationError, JsonObject};

/// 视图返回值
pub type ViewResult = Result<JsonObject, ApplicationError>;

/// 视图元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewMeta {
    pub name: &'static str,
    pub doc: &'static str,
}

impl ViewMeta {
    pub const fn new(name: &'static str, doc: &'static str) -> Self {
        Self { name, doc }
    }
}

/// 被包装的 JSON 视图
#[derive(Clone)]
pub struct JsonView<F> {
    meta: ViewMeta,
    view: F,
}

/// 包装视图函数
pub fn json_response<F>(meta: ViewMeta, view: F) -> JsonView<F> {
    JsonView { meta, view }
}

impl<F> JsonView<F> {
    pub fn meta(&self) -> ViewMeta {
        self.meta
    }

    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn doc(&self) -> &'static str {
        self.meta.doc
    }
}

impl<F> std::fmt::Debug for JsonView<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonView").field("meta", &self.meta).finish()
    }
}

impl<F> JsonView<F> {
    /// 调用视图并把结果转换为响应，不会向外传播任何错误
    pub async fn respond<Fut, S>(&self, request: Request, state: S) -> Response
    where
        F: Fn(Request, S) -> Fut,
        Fut: Future<Output = ViewResult>,
    {
        tracing::debug!(view = self.meta.name, "json_response");

        // 视图构造 future 时的同步 panic 也需捕获
        let outcome = match std::panic::catch_unwind(AssertUnwindSafe(|| (self.view)(request, state))) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
            Err(payload) => Err(payload),
        };

        match outcome {
            Ok(Ok(body)) => Json(body).into_response(),
            Ok(Err(err)) => err.into_response(),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(view = self.meta.name, error = %message, "View panicked");
                ApplicationError::Internal(anyhow::anyhow!(message)).into_response()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "view panicked".to_string()
    }
}

/// `Handler` 实现的类型标记
#[derive(Debug, Clone, Copy)]
pub struct JsonViewMarker;

impl<F, Fut, S> Handler<JsonViewMarker, S> for JsonView<F>
where
    F: Fn(Request, S) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ViewResult> + Send + 'static,
    S: Clone + Send + Sync + 'static,
{
    type Future = Pin<Box<dyn Future<Output = Response> + Send>>;

    fn call(self, req: Request, state: S) -> Self::Future {
        Box::pin(async move { self.respond(req, state).await })
    }
}
