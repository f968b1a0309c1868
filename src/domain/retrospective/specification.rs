//! 회고 목록 조회용 동적 필터
//!
//! 각 필터는 독립된 조건 단위로, 값이 없으면 아무 제약도 추가하지 않습니다.
//! [`all_of`]는 존재하는 조건만 AND로 결합하며 전부 없으면 모든 행과 일치합니다.

use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, Condition};

use super::entity::retrospective;
use crate::domain::bookmark::entity::bookmark;

/// 회고 컬렉션에 대한 조건 하나
pub trait RetrospectiveSpecification {
    fn to_condition(&self) -> Option<Condition>;
}

/// 제목에 키워드가 포함된 회고
#[derive(Debug, Clone, Default)]
pub struct KeywordSpecification {
    keyword: Option<String>,
}

impl KeywordSpecification {
    pub fn new(keyword: Option<&str>) -> Self {
        let keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        Self { keyword }
    }
}

impl RetrospectiveSpecification for KeywordSpecification {
    fn to_condition(&self) -> Option<Condition> {
        self.keyword.as_ref().map(|keyword| {
            Condition::all().add(retrospective::Column::Title.contains(keyword.as_str()))
        })
    }
}

/// 특정 사용자가 작성한 회고
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerSpecification {
    user_id: Option<i64>,
}

impl OwnerSpecification {
    pub fn new(user_id: Option<i64>) -> Self {
        Self { user_id }
    }
}

impl RetrospectiveSpecification for OwnerSpecification {
    fn to_condition(&self) -> Option<Condition> {
        self.user_id
            .map(|user_id| Condition::all().add(retrospective::Column::UserId.eq(user_id)))
    }
}

/// 사용자가 북마크한 회고만
///
/// `is_bookmarked`가 `Some(true)`이고 사용자가 주어졌을 때만 조건이 생깁니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookmarkSpecification {
    is_bookmarked: Option<bool>,
    user_id: Option<i64>,
}

impl BookmarkSpecification {
    pub fn new(is_bookmarked: Option<bool>, user_id: Option<i64>) -> Self {
        Self {
            is_bookmarked,
            user_id,
        }
    }
}

impl RetrospectiveSpecification for BookmarkSpecification {
    fn to_condition(&self) -> Option<Condition> {
        match (self.is_bookmarked, self.user_id) {
            (Some(true), Some(user_id)) => {
                let bookmarked_ids = Query::select()
                    .column(bookmark::Column::RetrospectiveId)
                    .from(bookmark::Entity)
                    .and_where(bookmark::Column::UserId.eq(user_id))
                    .to_owned();

                Some(
                    Condition::all()
                        .add(retrospective::Column::RetrospectiveId.in_subquery(bookmarked_ids)),
                )
            }
            _ => None,
        }
    }
}

/// 존재하는 조건만 AND로 결합
pub fn all_of(specs: &[&dyn RetrospectiveSpecification]) -> Condition {
    specs
        .iter()
        .filter_map(|spec| spec.to_condition())
        .fold(Condition::all(), |acc, condition| acc.add(condition))
}
