use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::dto::{
    CreateSectionRequest, CreateSectionResponse, EditSectionRequest, EditSectionResponse,
    IncreaseSectionLikesRequest, IncreaseSectionLikesResponse, SuccessCreateSectionResponse,
    SuccessEditSectionResponse, SuccessIncreaseSectionLikesResponse,
};
use super::service::SectionService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;
#[allow(unused_imports)]
use crate::utils::ErrorResponse;

/// 섹션 추가 API
#[utoipa::path(
    post,
    path = "/sections",
    request_body = CreateSectionRequest,
    responses(
        (status = 201, description = "섹션 생성 성공", body = SuccessCreateSectionResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "회고 또는 사용자 없음", body = ErrorResponse)
    ),
    tag = "Section"
)]
pub async fn create_section(
    State(state): State<AppState>,
    payload: Result<Json<CreateSectionRequest>, JsonRejection>,
) -> Result<BaseResponse<CreateSectionResponse>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let result = SectionService::create_section(state, req).await?;

    Ok(BaseResponse::created(result))
}

/// 섹션 내용 수정 API
#[utoipa::path(
    patch,
    path = "/sections/{section_id}",
    params(("section_id" = i64, Path, description = "섹션 ID")),
    request_body = EditSectionRequest,
    responses(
        (status = 200, description = "섹션 수정 성공", body = SuccessEditSectionResponse),
        (status = 404, description = "섹션 없음", body = ErrorResponse)
    ),
    tag = "Section"
)]
pub async fn edit_section_content(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EditSectionRequest>, JsonRejection>,
) -> Result<BaseResponse<EditSectionResponse>, AppError> {
    let Path(section_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let result = SectionService::update_section_content(state, section_id, req).await?;

    Ok(BaseResponse::success(result))
}

/// 섹션 좋아요 API
///
/// 호출할 때마다 좋아요 수가 1 증가합니다.
#[utoipa::path(
    post,
    path = "/sections/{section_id}/likes",
    params(("section_id" = i64, Path, description = "섹션 ID")),
    request_body = IncreaseSectionLikesRequest,
    responses(
        (status = 200, description = "좋아요 증가 성공", body = SuccessIncreaseSectionLikesResponse),
        (status = 404, description = "섹션 또는 사용자 없음", body = ErrorResponse)
    ),
    tag = "Section"
)]
pub async fn increase_section_likes(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<IncreaseSectionLikesRequest>, JsonRejection>,
) -> Result<BaseResponse<IncreaseSectionLikesResponse>, AppError> {
    let Path(section_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let result = SectionService::increase_section_likes(state, section_id, req).await?;

    Ok(BaseResponse::success(result))
}

/// 섹션 삭제 API
#[utoipa::path(
    delete,
    path = "/sections/{section_id}",
    params(("section_id" = i64, Path, description = "섹션 ID")),
    responses(
        (status = 204, description = "섹션 삭제 성공"),
        (status = 404, description = "섹션 없음", body = ErrorResponse)
    ),
    tag = "Section"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(section_id) = path?;

    SectionService::delete_section(state, section_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
