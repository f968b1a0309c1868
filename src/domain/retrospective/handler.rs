use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::dto::{
    CreateRetrospectiveRequest, CreateRetrospectiveResponse, DeleteRetrospectiveQuery,
    GetRetrospectivesQuery, RetrospectiveListResponse, RetrospectiveResponse,
    SuccessCreateRetrospectiveResponse, SuccessRetrospectiveListResponse,
    SuccessRetrospectiveResponse, SuccessToggleBookmarkResponse, ToggleBookmarkRequest,
    ToggleBookmarkResponse, UpdateRetrospectiveRequest, ViewerQuery,
};
use super::service::RetrospectiveService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;
#[allow(unused_imports)]
use crate::utils::ErrorResponse;

/// 회고 목록 조회 API
///
/// 키워드, 작성자, 북마크 여부로 필터링하고 생성일 기준으로 정렬한 페이지를 반환합니다.
#[utoipa::path(
    get,
    path = "/retrospectives",
    params(GetRetrospectivesQuery),
    responses(
        (status = 200, description = "회고 목록 조회 성공", body = SuccessRetrospectiveListResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_retrospectives(
    State(state): State<AppState>,
    query: Result<Query<GetRetrospectivesQuery>, QueryRejection>,
) -> Result<BaseResponse<RetrospectiveListResponse>, AppError> {
    let Query(query) = query?;

    let result = RetrospectiveService::get_retrospectives(state, query).await?;

    Ok(BaseResponse::success(result))
}

/// 회고 생성 API
#[utoipa::path(
    post,
    path = "/retrospectives",
    request_body = CreateRetrospectiveRequest,
    responses(
        (status = 201, description = "회고 생성 성공", body = SuccessCreateRetrospectiveResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "사용자 또는 템플릿 없음", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn create_retrospective(
    State(state): State<AppState>,
    payload: Result<Json<CreateRetrospectiveRequest>, JsonRejection>,
) -> Result<BaseResponse<CreateRetrospectiveResponse>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let result = RetrospectiveService::create_retrospective(state, req).await?;

    Ok(BaseResponse::created(result))
}

/// 회고 단건 조회 API
#[utoipa::path(
    get,
    path = "/retrospectives/{retrospective_id}",
    params(
        ("retrospective_id" = i64, Path, description = "회고 ID"),
        ViewerQuery
    ),
    responses(
        (status = 200, description = "회고 조회 성공", body = SuccessRetrospectiveResponse),
        (status = 404, description = "회고 없음", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn get_retrospective(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<ViewerQuery>, QueryRejection>,
) -> Result<BaseResponse<RetrospectiveResponse>, AppError> {
    let Path(retrospective_id) = path?;
    let Query(query) = query?;

    let result =
        RetrospectiveService::get_retrospective(state, retrospective_id, query.user_id).await?;

    Ok(BaseResponse::success(result))
}

/// 회고 수정 API
///
/// 요청에 포함된 필드(title, status, thumbnail, description)만 변경합니다.
#[utoipa::path(
    patch,
    path = "/retrospectives/{retrospective_id}",
    params(("retrospective_id" = i64, Path, description = "회고 ID")),
    request_body = UpdateRetrospectiveRequest,
    responses(
        (status = 200, description = "회고 수정 성공", body = SuccessRetrospectiveResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "회고 없음", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn update_retrospective(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateRetrospectiveRequest>, JsonRejection>,
) -> Result<BaseResponse<RetrospectiveResponse>, AppError> {
    let Path(retrospective_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let result = RetrospectiveService::update_retrospective(state, retrospective_id, req).await?;

    Ok(BaseResponse::success(result))
}

/// 회고 삭제 API
///
/// 작성자만 삭제할 수 있습니다.
#[utoipa::path(
    delete,
    path = "/retrospectives/{retrospective_id}",
    params(
        ("retrospective_id" = i64, Path, description = "회고 ID"),
        DeleteRetrospectiveQuery
    ),
    responses(
        (status = 204, description = "회고 삭제 성공"),
        (status = 403, description = "작성자가 아님", body = ErrorResponse),
        (status = 404, description = "회고 없음", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn delete_retrospective(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<DeleteRetrospectiveQuery>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Path(retrospective_id) = path?;
    let Query(query) = query?;
    query.validate()?;

    RetrospectiveService::delete_retrospective(state, retrospective_id, query.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 회고 북마크 토글 API
///
/// 북마크가 없으면 추가하고 있으면 해제합니다.
#[utoipa::path(
    post,
    path = "/retrospectives/{retrospective_id}/bookmarks",
    params(("retrospective_id" = i64, Path, description = "회고 ID")),
    request_body = ToggleBookmarkRequest,
    responses(
        (status = 200, description = "북마크 상태 변경 성공", body = SuccessToggleBookmarkResponse),
        (status = 404, description = "회고 또는 사용자 없음", body = ErrorResponse),
        (status = 409, description = "동시 토글 충돌", body = ErrorResponse)
    ),
    tag = "Retrospective"
)]
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ToggleBookmarkRequest>, JsonRejection>,
) -> Result<BaseResponse<ToggleBookmarkResponse>, AppError> {
    let Path(retrospective_id) = path?;
    let Json(req) = payload?;
    req.validate()?;

    let is_bookmarked =
        RetrospectiveService::toggle_bookmark(state, retrospective_id, req.user_id).await?;

    Ok(BaseResponse::success(ToggleBookmarkResponse {
        retrospective_id,
        is_bookmarked,
    }))
}
