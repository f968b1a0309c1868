use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::section;

// ============== 섹션 생성 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    #[validate(range(min = 1, message = "retrospectiveId는 1 이상이어야 합니다."))]
    pub retrospective_id: i64,

    /// 작성자
    #[validate(range(min = 1, message = "userId는 1 이상이어야 합니다."))]
    pub user_id: i64,

    #[validate(length(min = 1, max = 50, message = "카테고리는 1~50자여야 합니다."))]
    pub category: String,

    #[validate(length(min = 1, max = 1000, message = "섹션 내용은 1~1000자여야 합니다."))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionResponse {
    pub section_id: i64,
    pub retrospective_id: i64,
    pub user_id: i64,
    pub category: String,
    pub content: String,
    pub like_count: i64,
}

impl From<section::Model> for CreateSectionResponse {
    fn from(model: section::Model) -> Self {
        Self {
            section_id: model.section_id,
            retrospective_id: model.retrospective_id,
            user_id: model.user_id,
            category: model.category,
            content: model.content,
            like_count: model.like_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCreateSectionResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: CreateSectionResponse,
}

// ============== 섹션 수정 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditSectionRequest {
    #[validate(length(min = 1, max = 1000, message = "섹션 내용은 1~1000자여야 합니다."))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditSectionResponse {
    pub section_id: i64,
    pub content: String,
    pub updated_at: String,
}

impl From<section::Model> for EditSectionResponse {
    fn from(model: section::Model) -> Self {
        Self {
            section_id: model.section_id,
            content: model.content,
            updated_at: model.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEditSectionResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: EditSectionResponse,
}

// ============== 섹션 좋아요 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseSectionLikesRequest {
    /// 좋아요를 누른 사용자
    #[validate(range(min = 1, message = "userId는 1 이상이어야 합니다."))]
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseSectionLikesResponse {
    pub section_id: i64,
    pub like_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessIncreaseSectionLikesResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: IncreaseSectionLikesResponse,
}
