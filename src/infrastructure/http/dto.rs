//! Data Transfer Objects
//!
//! JSON 形状沿用对象服务器 JSON API 的约定（`@id`、`@type`、`omero:details`）

use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, JsonObject, LoginResponse, ProjectPage};
use crate::domain::project::Project;

/// 序列化为 JSON 对象（视图返回值）
pub fn to_object<T: Serialize>(value: &T) -> Result<JsonObject, ApplicationError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApplicationError::internal(format!(
            "expected a JSON object, got {}",
            other
        ))),
        Err(e) => Err(ApplicationError::Internal(e.into())),
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserRef {
    #[serde(rename = "@id")]
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponseDto {
    pub session_id: String,
    pub user: UserRef,
}

impl From<LoginResponse> for LoginResponseDto {
    fn from(response: LoginResponse) -> Self {
        Self {
            session_id: response.session_id,
            user: UserRef {
                id: response.user_id,
                username: response.username,
            },
        }
    }
}

// ============================================================================
// Project DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub owner: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OwnerRef {
    #[serde(rename = "@id")]
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DetailsDto {
    pub owner: OwnerRef,
}

#[derive(Debug, Serialize)]
pub struct ProjectDto {
    #[serde(rename = "@id")]
    pub id: i64,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "omero:details")]
    pub details: DetailsDto,
    pub created: String,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            kind: "Project",
            name: project.name().to_string(),
            description: project.description().map(str::to_string),
            details: DetailsDto {
                owner: OwnerRef {
                    id: project.owner_id().0,
                },
            },
            created: project.created_at().to_rfc3339(),
        }
    }
}

/// 单个对象响应 `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub offset: usize,
    pub limit: usize,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "maxLimit")]
    pub max_limit: usize,
}

/// 列表响应 `{"data": [...], "meta": {...}}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl ListResponse<ProjectDto> {
    pub fn from_page(page: &ProjectPage, offset: usize, limit: usize, max_limit: usize) -> Self {
        Self {
            data: page.items.iter().map(ProjectDto::from).collect(),
            meta: PageMeta {
                offset,
                limit,
                total_count: page.total,
                max_limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{OwnerId, ProjectId, ProjectName};
    use serde_json::json;

    #[test]
    fn test_project_dto_shape() {
        let project = Project::new(
            ProjectId::new(12).unwrap(),
            ProjectName::new("HCS").unwrap(),
            None,
            OwnerId(3),
        );
        let value = to_object(&ProjectDto::from(&project)).unwrap();

        assert_eq!(value["@id"], json!(12));
        assert_eq!(value["@type"], json!("Project"));
        assert_eq!(value["Name"], json!("HCS"));
        assert!(value.get("Description").is_none());
        assert_eq!(value["omero:details"], json!({"owner": {"@id": 3}}));
    }

    #[test]
    fn test_to_object_rejects_non_objects() {
        let err = to_object(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
