use chrono::Utc;
use sea_orm::sea_query::Order;
use sea_orm::{
    AccessMode, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ItemsAndPagesNumber,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};

use super::dto::{
    CreateRetrospectiveRequest, CreateRetrospectiveResponse, GetRetrospectivesQuery,
    RetrospectiveListResponse, RetrospectiveResponse, RetrospectiveType,
    UpdateRetrospectiveRequest,
};
use super::entity::retrospective::{self, ProjectStatus};
use super::entity::retrospective_template;
use super::specification::{
    all_of, BookmarkSpecification, KeywordSpecification, OwnerSpecification,
};
use crate::domain::bookmark::BookmarkService;
use crate::domain::section::SectionService;
use crate::domain::team::TeamService;
use crate::domain::user::entity::user;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::pagination::{PageMeta, PageRequest, PaginationResponse};

pub struct RetrospectiveService;

impl RetrospectiveService {
    /// 회고 목록 조회
    ///
    /// 키워드, 작성자, 북마크 필터를 조합해 페이지 단위로 조회합니다.
    pub async fn get_retrospectives(
        state: AppState,
        query: GetRetrospectivesQuery,
    ) -> Result<RetrospectiveListResponse, AppError> {
        // 1. 정렬/페이지 해석
        let order = query.order.unwrap_or_default();
        let page_request = PageRequest::of(query.page, query.size)?;

        if query.is_bookmarked == Some(true) && query.user_id.is_none() {
            return Err(AppError::bad_request(
                "북마크 필터를 사용하려면 userId가 필요합니다.",
            ));
        }

        // 2. 동적 조건 조합
        let keyword = KeywordSpecification::new(query.keyword.as_deref());
        let owner = OwnerSpecification::new(query.user_id);
        let bookmark = BookmarkSpecification::new(query.is_bookmarked, query.user_id);
        let condition = all_of(&[&keyword, &owner, &bookmark]);

        let direction = if order.is_ascending() {
            Order::Asc
        } else {
            Order::Desc
        };

        // 3. 읽기 전용 트랜잭션에서 페이지 조회 (동일 시간일 경우 ID로 안정 정렬)
        let txn = state
            .db
            .begin_with_config(None, Some(AccessMode::ReadOnly))
            .await?;

        let paginator = retrospective::Entity::find()
            .filter(condition)
            .order_by(retrospective::Column::CreatedAt, direction.clone())
            .order_by(retrospective::Column::RetrospectiveId, direction)
            .paginate(&txn, page_request.size);

        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page_request.page).await?;

        // 4. 조회 사용자의 북마크 여부
        let bookmarked = match query.user_id {
            Some(user_id) => {
                let ids: Vec<i64> = rows.iter().map(|r| r.retrospective_id).collect();
                BookmarkService::bookmarked_ids(&txn, user_id, &ids).await?
            }
            None => Default::default(),
        };

        txn.commit().await?;

        let meta = PageMeta {
            total_count: number_of_items,
            total_pages: number_of_pages,
            current_page: page_request.page,
        };
        let page = PaginationResponse::from_page(rows, meta, |model| {
            let is_bookmarked = bookmarked.contains(&model.retrospective_id);
            RetrospectiveResponse::of(model, is_bookmarked)
        });

        Ok(RetrospectiveListResponse::new(page, !bookmarked.is_empty()))
    }

    /// 회고 단건 조회
    pub async fn get_retrospective(
        state: AppState,
        retrospective_id: i64,
        viewer_id: Option<i64>,
    ) -> Result<RetrospectiveResponse, AppError> {
        let txn = state
            .db
            .begin_with_config(None, Some(AccessMode::ReadOnly))
            .await?;

        let found = Self::find_retrospective(&txn, retrospective_id).await?;
        let is_bookmarked = Self::is_bookmarked_by(&txn, retrospective_id, viewer_id).await?;

        txn.commit().await?;

        Ok(RetrospectiveResponse::of(found, is_bookmarked))
    }

    /// 회고 생성
    ///
    /// 팀 회고이면 팀과 사용자-팀 연결을 먼저 만듭니다.
    pub async fn create_retrospective(
        state: AppState,
        req: CreateRetrospectiveRequest,
    ) -> Result<CreateRetrospectiveResponse, AppError> {
        let txn = state.db.begin().await?;

        // 1. 사용자 및 템플릿 존재 확인
        user::Entity::find_by_id(req.user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 사용자입니다: {}", req.user_id))
            })?;

        retrospective_template::Entity::find_by_id(req.template_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 템플릿입니다: {}", req.template_id))
            })?;

        // 2. 팀 회고일 때만 팀 생성
        let team_id = match req.retrospective_type {
            RetrospectiveType::Team => {
                Some(TeamService::create_team_with_user(&txn, req.user_id).await?.team_id)
            }
            RetrospectiveType::Personal => None,
        };

        // 3. 회고 저장
        let now = Utc::now().naive_utc();
        let saved = retrospective::ActiveModel {
            title: Set(req.title),
            team_id: Set(team_id),
            user_id: Set(req.user_id),
            template_id: Set(req.template_id),
            status: Set(req.status.unwrap_or(ProjectStatus::NotStarted)),
            thumbnail: Set(req.thumbnail),
            description: Set(req.description),
            start_date: Set(req.start_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            retrospective_id = saved.retrospective_id,
            user_id = saved.user_id,
            team_id = ?saved.team_id,
            "회고 생성 완료"
        );

        Ok(saved.into())
    }

    /// 회고 수정
    ///
    /// 요청에 값이 있는 필드만 바꾸고, 갱신된 행으로 응답을 만듭니다.
    pub async fn update_retrospective(
        state: AppState,
        retrospective_id: i64,
        req: UpdateRetrospectiveRequest,
    ) -> Result<RetrospectiveResponse, AppError> {
        let txn = state.db.begin().await?;

        let found = Self::find_retrospective(&txn, retrospective_id).await?;

        let mut active = found.into_active_model();
        if let Some(title) = req.title {
            active.title = Set(title);
        }
        if let Some(status) = req.status {
            active.status = Set(status);
        }
        if let Some(thumbnail) = req.thumbnail {
            active.thumbnail = Set(Some(thumbnail));
        }
        if let Some(description) = req.description {
            active.description = Set(Some(description));
        }
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(&txn).await?;
        let is_bookmarked = Self::is_bookmarked_by(&txn, retrospective_id, req.user_id).await?;

        txn.commit().await?;

        info!(retrospective_id = retrospective_id, "회고 수정 완료");

        Ok(RetrospectiveResponse::of(updated, is_bookmarked))
    }

    /// 회고 삭제
    ///
    /// 작성자만 삭제할 수 있으며 북마크, 섹션, 좋아요 이력도 함께 지웁니다.
    pub async fn delete_retrospective(
        state: AppState,
        retrospective_id: i64,
        user_id: i64,
    ) -> Result<(), AppError> {
        info!(
            user_id = user_id,
            retrospective_id = retrospective_id,
            "회고 삭제 요청"
        );

        let txn = state.db.begin().await?;

        // 1. 존재 및 소유자 확인
        let found = Self::find_retrospective(&txn, retrospective_id).await?;

        if !found.is_owned_by(user_id) {
            warn!(
                user_id = user_id,
                owner_id = found.user_id,
                retrospective_id = retrospective_id,
                "작성자가 아닌 사용자의 회고 삭제 시도"
            );
            return Err(AppError::invalid_operation(format!(
                "회고를 삭제할 권한이 없습니다: {}",
                retrospective_id
            )));
        }

        // 2. 연관 데이터 삭제
        let bookmarks_deleted =
            BookmarkService::delete_by_retrospective(&txn, retrospective_id).await?;
        let sections_deleted =
            SectionService::delete_by_retrospective(&txn, retrospective_id).await?;

        // 3. 회고 삭제
        retrospective::Entity::delete_by_id(retrospective_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            retrospective_id = retrospective_id,
            bookmarks_deleted = bookmarks_deleted,
            sections_deleted = sections_deleted,
            "회고 및 연관 데이터 삭제 완료"
        );

        Ok(())
    }

    /// 북마크 토글. 결과 상태를 반환합니다.
    pub async fn toggle_bookmark(
        state: AppState,
        retrospective_id: i64,
        user_id: i64,
    ) -> Result<bool, AppError> {
        BookmarkService::toggle_bookmark(state, user_id, retrospective_id).await
    }

    async fn find_retrospective<C>(
        db: &C,
        retrospective_id: i64,
    ) -> Result<retrospective::Model, AppError>
    where
        C: ConnectionTrait,
    {
        retrospective::Entity::find_by_id(retrospective_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 회고입니다: {}", retrospective_id))
            })
    }

    async fn is_bookmarked_by<C>(
        db: &C,
        retrospective_id: i64,
        viewer_id: Option<i64>,
    ) -> Result<bool, AppError>
    where
        C: ConnectionTrait,
    {
        let Some(viewer_id) = viewer_id else {
            return Ok(false);
        };

        let ids = BookmarkService::bookmarked_ids(db, viewer_id, &[retrospective_id]).await?;
        Ok(ids.contains(&retrospective_id))
    }
}
