//! WebGateway - JSON Web 网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Project Context: 项目管理上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SessionManager, AccountDirectory, ProjectRepository）
//! - Commands: CQRS 命令处理器（登录、登出、创建/删除项目）
//! - Queries: CQRS 查询处理器
//! - Error: 视图错误种类
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 登录检查、JSON 视图包装、错误映射、路由
//! - Memory: 会话、账户、项目的内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
