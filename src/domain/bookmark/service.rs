use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::entity::bookmark;
use crate::domain::retrospective::entity::retrospective;
use crate::domain::user::entity::user;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct BookmarkService;

impl BookmarkService {
    /// 북마크 토글
    ///
    /// 북마크가 없으면 만들고 `true`, 있으면 지우고 `false`를 반환합니다.
    pub async fn toggle_bookmark(
        state: AppState,
        user_id: i64,
        retrospective_id: i64,
    ) -> Result<bool, AppError> {
        let txn = state.db.begin().await?;

        // 1. 회고 및 사용자 존재 확인
        retrospective::Entity::find_by_id(retrospective_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("존재하지 않는 회고입니다: {}", retrospective_id))
            })?;

        user::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found(format!("존재하지 않는 사용자입니다: {}", user_id)))?;

        // 2. 기존 북마크 조회 후 상태 뒤집기
        let existing = bookmark::Entity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .filter(bookmark::Column::RetrospectiveId.eq(retrospective_id))
            .one(&txn)
            .await?;

        let is_bookmarked = match existing {
            Some(found) => {
                found.delete(&txn).await?;
                false
            }
            None => {
                bookmark::ActiveModel {
                    user_id: Set(user_id),
                    retrospective_id: Set(retrospective_id),
                    created_at: Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    // 동시에 들어온 첫 토글끼리 유니크 제약에서 충돌
                    AppError::conflict_on_unique(
                        e,
                        "북마크 요청이 동시에 처리되었습니다. 다시 시도해 주세요.",
                    )
                })?;
                true
            }
        };

        txn.commit().await?;

        info!(
            user_id = user_id,
            retrospective_id = retrospective_id,
            is_bookmarked = is_bookmarked,
            "북마크 토글 완료"
        );

        Ok(is_bookmarked)
    }

    /// 주어진 회고 중 사용자가 북마크한 회고 ID 집합
    pub async fn bookmarked_ids<C>(
        db: &C,
        user_id: i64,
        retrospective_ids: &[i64],
    ) -> Result<HashSet<i64>, DbErr>
    where
        C: ConnectionTrait,
    {
        if retrospective_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i64> = bookmark::Entity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .filter(bookmark::Column::RetrospectiveId.is_in(retrospective_ids.to_vec()))
            .select_only()
            .column(bookmark::Column::RetrospectiveId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// 회고에 달린 북마크 전체 삭제
    pub async fn delete_by_retrospective<C>(db: &C, retrospective_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = bookmark::Entity::delete_many()
            .filter(bookmark::Column::RetrospectiveId.eq(retrospective_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
