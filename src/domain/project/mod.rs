//! Project Context - 项目限界上下文
//!
//! 职责:
//! - 项目元数据（名称、描述、所有者）
//! - 名称校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Project;
pub use errors::ProjectError;
pub use value_objects::{OwnerId, ProjectId, ProjectName};
