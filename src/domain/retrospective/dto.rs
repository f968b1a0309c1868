use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::retrospective::{self, ProjectStatus};
use crate::utils::pagination::{PaginationResponse, RetrospectivesOrderType};

/// 개인 회고 / 팀 회고
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetrospectiveType {
    Personal,
    Team,
}

// ============== 회고 생성 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetrospectiveRequest {
    #[validate(length(min = 1, max = 100, message = "회고 제목은 1~100자여야 합니다."))]
    pub title: String,

    #[validate(range(min = 1, message = "userId는 1 이상이어야 합니다."))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "templateId는 1 이상이어야 합니다."))]
    pub template_id: i64,

    #[serde(rename = "type")]
    pub retrospective_type: RetrospectiveType,

    /// 생략 시 NOT_STARTED
    pub status: Option<ProjectStatus>,

    #[validate(length(max = 2048, message = "썸네일 URL은 2048자를 초과할 수 없습니다."))]
    pub thumbnail: Option<String>,

    #[validate(length(max = 500, message = "회고 설명은 500자를 초과할 수 없습니다."))]
    pub description: Option<String>,

    /// YYYY-MM-DD
    #[schema(value_type = Option<String>, example = "2026-10-14")]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetrospectiveResponse {
    pub id: i64,
    pub title: String,
    pub team_id: Option<i64>,
    pub user_id: i64,
    pub template_id: i64,
    pub status: ProjectStatus,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
}

impl From<retrospective::Model> for CreateRetrospectiveResponse {
    fn from(model: retrospective::Model) -> Self {
        Self {
            id: model.retrospective_id,
            title: model.title,
            team_id: model.team_id,
            user_id: model.user_id,
            template_id: model.template_id,
            status: model.status,
            thumbnail: model.thumbnail,
            description: model.description,
            start_date: model.start_date.map(format_date),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCreateRetrospectiveResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: CreateRetrospectiveResponse,
}

// ============== 회고 목록 조회 ==============

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetRetrospectivesQuery {
    /// 0부터 시작
    pub page: Option<u64>,
    /// 1~100, 기본 10
    pub size: Option<u64>,
    /// NEWEST(기본) | OLDEST | PREVIOUSLY
    #[param(value_type = Option<String>)]
    pub order: Option<RetrospectivesOrderType>,
    /// 제목 검색어
    pub keyword: Option<String>,
    /// 작성자 겸 조회 사용자
    pub user_id: Option<i64>,
    /// true이면 userId가 북마크한 회고만
    pub is_bookmarked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveResponse {
    pub retrospective_id: i64,
    pub title: String,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub template_id: i64,
    pub status: ProjectStatus,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    /// 조회 사용자가 이 회고를 북마크했는지
    pub is_bookmarked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl RetrospectiveResponse {
    pub fn of(model: retrospective::Model, is_bookmarked: bool) -> Self {
        Self {
            retrospective_id: model.retrospective_id,
            title: model.title,
            user_id: model.user_id,
            team_id: model.team_id,
            template_id: model.template_id,
            status: model.status,
            thumbnail: model.thumbnail,
            description: model.description,
            start_date: model.start_date.map(format_date),
            is_bookmarked,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            updated_at: model.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveListResponse {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    /// 조회 사용자가 이 페이지의 회고 중 하나라도 북마크했는지
    pub has_bookmarks_by_user: bool,
    pub data: Vec<RetrospectiveResponse>,
}

impl RetrospectiveListResponse {
    pub fn new(page: PaginationResponse<RetrospectiveResponse>, has_bookmarks_by_user: bool) -> Self {
        Self {
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
            has_bookmarks_by_user,
            data: page.data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRetrospectiveListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RetrospectiveListResponse,
}

// ============== 회고 단건 조회 ==============

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ViewerQuery {
    /// 북마크 여부를 계산할 사용자
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRetrospectiveResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RetrospectiveResponse,
}

// ============== 회고 수정 ==============

/// 값이 있는 필드만 변경합니다.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRetrospectiveRequest {
    /// 응답의 북마크 여부 계산용
    pub user_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "회고 제목은 1~100자여야 합니다."))]
    pub title: Option<String>,

    pub status: Option<ProjectStatus>,

    #[validate(length(max = 2048, message = "썸네일 URL은 2048자를 초과할 수 없습니다."))]
    pub thumbnail: Option<String>,

    #[validate(length(max = 500, message = "회고 설명은 500자를 초과할 수 없습니다."))]
    pub description: Option<String>,
}

// ============== 회고 삭제 ==============

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeleteRetrospectiveQuery {
    /// 삭제를 요청한 사용자 (작성자만 가능)
    #[validate(range(min = 1, message = "userId는 1 이상이어야 합니다."))]
    pub user_id: i64,
}

// ============== 북마크 토글 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookmarkRequest {
    #[validate(range(min = 1, message = "userId는 1 이상이어야 합니다."))]
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBookmarkResponse {
    pub retrospective_id: i64,
    /// true: 북마크됨, false: 해제됨
    pub is_bookmarked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessToggleBookmarkResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ToggleBookmarkResponse,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
