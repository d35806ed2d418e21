//! Project Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OwnerId, ProjectId, ProjectName};

/// Project 聚合根
///
/// 不变量:
/// - id 由仓储分配，创建后不可变
/// - owner 决定删除权限
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<String>,
    owner_id: OwnerId,
    created_at: DateTime<Utc>,
}

impl Project {
    /// 创建新项目
    pub fn new(
        id: ProjectId,
        name: ProjectName,
        description: Option<String>,
        owner_id: OwnerId,
    ) -> Self {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            id,
            name,
            description,
            owner_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, owner: OwnerId) -> bool {
        self.owner_id == owner
    }
}
