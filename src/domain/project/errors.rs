//! Project Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Invalid project name: {0}")]
    InvalidName(&'static str),

    #[error("Invalid project id: {0}")]
    InvalidId(i64),
}
