//! Command Handlers 实现

mod auth_handlers;
mod project_handlers;

pub use auth_handlers::*;
pub use project_handlers::*;
