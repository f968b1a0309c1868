//! 페이지 단위 조회 결과를 응답 형태로 변환합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::error::AppError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// 목록 정렬 기준
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetrospectivesOrderType {
    /// 생성일 내림차순
    #[default]
    Newest,
    /// 생성일 오름차순
    Oldest,
    /// 생성일 오름차순 (OLDEST와 동일)
    Previously,
}

impl RetrospectivesOrderType {
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Oldest | Self::Previously)
    }
}

/// 0부터 시작하는 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn of(page: Option<u64>, size: Option<u64>) -> Result<Self, AppError> {
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(AppError::bad_request(format!(
                "size는 1 이상 {} 이하여야 합니다.",
                MAX_PAGE_SIZE
            )));
        }

        // OFFSET = page * size 가 i64 범위를 넘으면 거절
        let page = page.unwrap_or(0);
        let in_range = page
            .checked_mul(size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(AppError::bad_request(format!(
                "page 값이 너무 큽니다: {}",
                page
            )));
        }

        Ok(Self { page, size })
    }
}

/// 조회된 페이지의 메타 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse<T> {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub data: Vec<T>,
}

impl<T> PaginationResponse<T> {
    /// 페이지의 각 항목을 `mapper`로 변환합니다. 순서는 원본 페이지와 동일합니다.
    pub fn from_page<E, F>(items: Vec<E>, meta: PageMeta, mapper: F) -> Self
    where
        F: FnMut(E) -> T,
    {
        Self {
            total_count: meta.total_count,
            total_pages: meta.total_pages,
            current_page: meta.current_page,
            data: items.into_iter().map(mapper).collect(),
        }
    }
}
