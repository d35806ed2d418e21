//! Project Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ProjectError;

/// 项目名称最大长度（字符数）
const MAX_NAME_CHARS: usize = 255;

/// 项目唯一标识（服务端分配的正整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(i64);

impl ProjectId {
    pub fn new(id: i64) -> Result<Self, ProjectError> {
        if id <= 0 {
            return Err(ProjectError::InvalidId(id));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 所有者（实验者）标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub i64);

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 项目名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ProjectError::InvalidName("name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ProjectError::InvalidName("name cannot exceed 255 characters"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_must_be_positive() {
        assert!(ProjectId::new(1).is_ok());
        assert!(matches!(ProjectId::new(0), Err(ProjectError::InvalidId(0))));
        assert!(ProjectId::new(-3).is_err());
    }

    #[test]
    fn test_project_name_is_trimmed() {
        let name = ProjectName::new("  screening  ").unwrap();
        assert_eq!(name.as_str(), "screening");
    }

    #[test]
    fn test_project_name_rejects_blank() {
        assert!(ProjectName::new("   ").is_err());
    }

    #[test]
    fn test_project_name_length_counts_chars() {
        assert!(ProjectName::new("项".repeat(255)).is_ok());
        assert!(ProjectName::new("a".repeat(256)).is_err());
    }
}
