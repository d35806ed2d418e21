//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现以及 HTTP 层

pub mod http;
pub mod memory;

pub use memory::{InMemoryAccountDirectory, InMemoryProjectRepository, InMemorySessionManager};
