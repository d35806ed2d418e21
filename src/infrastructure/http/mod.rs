//! HTTP Layer - JSON API
//!
//! - auth: 登录检查与未登录钩子
//! - json_response: JSON 视图包装
//! - error: 错误到状态码的映射

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod json_response;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{JsonNotLoggedIn, LoginRequired, OnNotLoggedIn, Principal, RedirectToLogin};
pub use error::ErrorResponse;
pub use json_response::{json_response, JsonView, ViewMeta, ViewResult};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
