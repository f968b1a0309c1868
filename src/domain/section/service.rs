use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{
    CreateSectionRequest, CreateSectionResponse, EditSectionRequest, EditSectionResponse,
    IncreaseSectionLikesRequest, IncreaseSectionLikesResponse,
};
use super::entity::{section, section_like};
use crate::domain::retrospective::entity::retrospective;
use crate::domain::user::entity::user;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct SectionService;

impl SectionService {
    /// 섹션 생성
    pub async fn create_section(
        state: AppState,
        req: CreateSectionRequest,
    ) -> Result<CreateSectionResponse, AppError> {
        let txn = state.db.begin().await?;

        // 1. 회고 및 작성자 존재 확인
        retrospective::Entity::find_by_id(req.retrospective_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 회고입니다: {}", req.retrospective_id))
            })?;

        user::Entity::find_by_id(req.user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 사용자입니다: {}", req.user_id))
            })?;

        // 2. 섹션 저장 (좋아요 0으로 시작)
        let now = Utc::now().naive_utc();
        let saved = section::ActiveModel {
            retrospective_id: Set(req.retrospective_id),
            user_id: Set(req.user_id),
            category: Set(req.category),
            content: Set(req.content),
            like_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            section_id = saved.section_id,
            retrospective_id = saved.retrospective_id,
            "섹션 생성 완료"
        );

        Ok(saved.into())
    }

    /// 섹션 내용 수정
    pub async fn update_section_content(
        state: AppState,
        section_id: i64,
        req: EditSectionRequest,
    ) -> Result<EditSectionResponse, AppError> {
        let txn = state.db.begin().await?;

        let found = Self::find_section(&txn, section_id).await?;

        let mut active = found.into_active_model();
        active.content = Set(req.content);
        active.updated_at = Set(Utc::now().naive_utc());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        info!(section_id = section_id, "섹션 내용 수정 완료");

        Ok(updated.into())
    }

    /// 섹션 좋아요 증가
    ///
    /// 요청마다 좋아요 이력을 남기고 카운트를 1 올립니다. 취소는 없습니다.
    pub async fn increase_section_likes(
        state: AppState,
        section_id: i64,
        req: IncreaseSectionLikesRequest,
    ) -> Result<IncreaseSectionLikesResponse, AppError> {
        let txn = state.db.begin().await?;

        Self::find_section(&txn, section_id).await?;

        user::Entity::find_by_id(req.user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 사용자입니다: {}", req.user_id))
            })?;

        section_like::ActiveModel {
            section_id: Set(section_id),
            user_id: Set(req.user_id),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // 읽고-쓰기 대신 DB에서 직접 증가
        section::Entity::update_many()
            .col_expr(
                section::Column::LikeCount,
                Expr::col(section::Column::LikeCount).add(1),
            )
            .filter(section::Column::SectionId.eq(section_id))
            .exec(&txn)
            .await?;

        let like_count: i64 = section::Entity::find_by_id(section_id)
            .select_only()
            .column(section::Column::LikeCount)
            .into_tuple()
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(format!("존재하지 않는 섹션입니다: {}", section_id)))?;

        txn.commit().await?;

        info!(
            section_id = section_id,
            user_id = req.user_id,
            like_count = like_count,
            "섹션 좋아요 증가"
        );

        Ok(IncreaseSectionLikesResponse {
            section_id,
            like_count,
        })
    }

    /// 섹션 삭제
    pub async fn delete_section(state: AppState, section_id: i64) -> Result<(), AppError> {
        let txn = state.db.begin().await?;

        let found = Self::find_section(&txn, section_id).await?;

        let likes_deleted = section_like::Entity::delete_many()
            .filter(section_like::Column::SectionId.eq(section_id))
            .exec(&txn)
            .await?;

        found.delete(&txn).await?;

        txn.commit().await?;

        info!(
            section_id = section_id,
            likes_deleted = likes_deleted.rows_affected,
            "섹션 삭제 완료"
        );

        Ok(())
    }

    /// 회고에 속한 섹션과 좋아요 이력 전체 삭제
    pub async fn delete_by_retrospective<C>(db: &C, retrospective_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let section_ids: Vec<i64> = section::Entity::find()
            .filter(section::Column::RetrospectiveId.eq(retrospective_id))
            .select_only()
            .column(section::Column::SectionId)
            .into_tuple()
            .all(db)
            .await?;

        if section_ids.is_empty() {
            return Ok(0);
        }

        section_like::Entity::delete_many()
            .filter(section_like::Column::SectionId.is_in(section_ids))
            .exec(db)
            .await?;

        let deleted = section::Entity::delete_many()
            .filter(section::Column::RetrospectiveId.eq(retrospective_id))
            .exec(db)
            .await?;

        Ok(deleted.rows_affected)
    }

    async fn find_section<C>(db: &C, section_id: i64) -> Result<section::Model, AppError>
    where
        C: ConnectionTrait,
    {
        section::Entity::find_by_id(section_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("존재하지 않는 섹션입니다: {}", section_id)))
    }
}
