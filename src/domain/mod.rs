//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Project Context: 项目管理

pub mod project;
