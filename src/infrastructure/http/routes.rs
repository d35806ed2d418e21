//! HTTP Routes
//!
//! API Endpoints:
//! - /api                          GET     视图索引
//! - /api/ping                     GET     健康检查
//! - /api/login                    POST    登录（201）
//! - /api/logout                   POST    登出（需登录）
//! - /api/v0/m/projects            GET     列出项目（需登录）
//! - /api/v0/m/projects            POST    创建项目（需登录，201）
//! - /api/v0/m/projects/:id        GET     获取项目（需登录）
//! - /api/v0/m/projects/:id        DELETE  删除项目（需登录）

use axum::{
    handler::Handler,
    routing::{self, MethodRouter},
    Extension, Router,
};
use std::sync::Arc;

use super::auth::{login_required, LoginRequired};
use super::handlers::{self, ApiIndex, RouteEntry};
use super::json_response::{json_response, JsonView, JsonViewMarker, ViewMeta};
use super::state::AppState;

/// 记录视图元数据的路由构建器
struct ViewRoutes {
    router: Router<Arc<AppState>>,
    entries: Vec<RouteEntry>,
}

impl ViewRoutes {
    fn new() -> Self {
        Self {
            router: Router::new(),
            entries: Vec::new(),
        }
    }

    fn add(
        mut self,
        method: &'static str,
        path: &'static str,
        meta: ViewMeta,
        route: MethodRouter<Arc<AppState>>,
    ) -> Self {
        self.entries.push(RouteEntry { method, path, meta });
        self.router = self.router.route(path, route);
        self
    }

    fn get<F>(self, path: &'static str, meta: ViewMeta, view: F) -> Self
    where
        JsonView<F>: Handler<JsonViewMarker, Arc<AppState>>,
    {
        self.add("GET", path, meta, routing::get(json_response(meta, view)))
    }

    fn post<F>(self, path: &'static str, meta: ViewMeta, view: F) -> Self
    where
        JsonView<F>: Handler<JsonViewMarker, Arc<AppState>>,
    {
        self.add("POST", path, meta, routing::post(json_response(meta, view)))
    }

    fn delete<F>(self, path: &'static str, meta: ViewMeta, view: F) -> Self
    where
        JsonView<F>: Handler<JsonViewMarker, Arc<AppState>>,
    {
        self.add("DELETE", path, meta, routing::delete(json_response(meta, view)))
    }
}

/// 创建所有路由
///
/// 需登录的视图挂在 `gate` 之后；未登录时由 gate 的钩子生成响应
pub fn create_routes(gate: LoginRequired) -> Router<Arc<AppState>> {
    let public = ViewRoutes::new()
        .get("/api", handlers::API_INDEX, handlers::api_index)
        .get("/api/ping", handlers::PING, handlers::ping)
        .post("/api/login", handlers::LOGIN, handlers::login);

    let protected = ViewRoutes::new()
        .post("/api/logout", handlers::LOGOUT, handlers::logout)
        .get("/api/v0/m/projects", handlers::LIST_PROJECTS, handlers::list_projects)
        .post("/api/v0/m/projects", handlers::CREATE_PROJECT, handlers::create_project)
        .get("/api/v0/m/projects/:id", handlers::GET_PROJECT, handlers::get_project)
        .delete("/api/v0/m/projects/:id", handlers::DELETE_PROJECT, handlers::delete_project);

    let mut entries = public.entries;
    entries.extend(protected.entries);

    let protected_router = protected
        .router
        .route_layer(axum::middleware::from_fn_with_state(gate, login_required));

    public
        .router
        .merge(protected_router)
        .layer(Extension(ApiIndex(Arc::new(entries))))
}
