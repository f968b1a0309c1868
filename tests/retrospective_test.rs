//! 회고 서비스 통합 테스트
//!
//! 테스트 대상:
//! - 회고 생성 (개인/팀, 존재하지 않는 사용자/템플릿)
//! - 목록 조회 (정렬, 키워드, 작성자, 북마크 필터, 페이지)
//! - 수정 / 삭제 (작성자 검증, 연관 데이터 정리)

mod common;

use common::{personal_request, seed_retrospective, seed_user, setup_state, KPT_TEMPLATE_ID};
use retrospective_server::domain::retrospective::dto::{
    GetRetrospectivesQuery, RetrospectiveType, UpdateRetrospectiveRequest,
};
use retrospective_server::domain::retrospective::entity::retrospective::ProjectStatus;
use retrospective_server::domain::retrospective::RetrospectiveService;
use retrospective_server::domain::section::dto::CreateSectionRequest;
use retrospective_server::domain::section::entity::section;
use retrospective_server::domain::section::SectionService;
use retrospective_server::domain::team::entity::user_team;
use retrospective_server::utils::error::AppError;
use retrospective_server::utils::pagination::RetrospectivesOrderType;
use sea_orm::{EntityTrait, PaginatorTrait};

// ============== 회고 생성 ==============

#[tokio::test]
async fn should_create_personal_retrospective_with_default_status() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;

    // Act
    let result =
        RetrospectiveService::create_retrospective(state.clone(), personal_request(user_id, "1주차 회고"))
            .await
            .unwrap();

    // Assert
    assert_eq!(result.title, "1주차 회고");
    assert_eq!(result.user_id, user_id);
    assert_eq!(result.template_id, KPT_TEMPLATE_ID);
    assert_eq!(result.status, ProjectStatus::NotStarted);
    assert!(result.team_id.is_none());
}

#[tokio::test]
async fn should_create_team_and_membership_for_team_retrospective() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let mut req = personal_request(user_id, "팀 회고");
    req.retrospective_type = RetrospectiveType::Team;
    req.status = Some(ProjectStatus::InProgress);

    // Act
    let result = RetrospectiveService::create_retrospective(state.clone(), req)
        .await
        .unwrap();

    // Assert
    let team_id = result.team_id.expect("팀 회고는 팀 ID를 가져야 합니다");
    let memberships = user_team::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].team_id, team_id);
    assert_eq!(memberships[0].user_id, user_id);
    assert_eq!(result.status, ProjectStatus::InProgress);
}

#[tokio::test]
async fn should_return_not_found_when_user_does_not_exist() {
    // Arrange
    let state = setup_state().await;

    // Act
    let result =
        RetrospectiveService::create_retrospective(state.clone(), personal_request(999, "회고"))
            .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_return_not_found_when_template_does_not_exist() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let mut req = personal_request(user_id, "회고");
    req.template_id = 999;

    // Act
    let result = RetrospectiveService::create_retrospective(state.clone(), req).await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_not_create_team_when_template_is_missing() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let mut req = personal_request(user_id, "회고");
    req.retrospective_type = RetrospectiveType::Team;
    req.template_id = 999;

    // Act
    let result = RetrospectiveService::create_retrospective(state.clone(), req).await;

    // Assert
    assert!(result.is_err());
    let memberships = user_team::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(memberships, 0);
}

// ============== 목록 조회 ==============

#[tokio::test]
async fn should_list_newest_first_by_default() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let first = seed_retrospective(&state, user_id, "첫 번째").await;
    let second = seed_retrospective(&state, user_id, "두 번째").await;
    let third = seed_retrospective(&state, user_id, "세 번째").await;

    // Act
    let result =
        RetrospectiveService::get_retrospectives(state.clone(), GetRetrospectivesQuery::default())
            .await
            .unwrap();

    // Assert
    let ids: Vec<i64> = result.data.iter().map(|r| r.retrospective_id).collect();
    assert_eq!(ids, vec![third, second, first]);
    assert_eq!(result.total_count, 3);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.current_page, 0);
    assert!(!result.has_bookmarks_by_user);
}

#[tokio::test]
async fn should_list_oldest_first_when_order_is_oldest_or_previously() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let first = seed_retrospective(&state, user_id, "첫 번째").await;
    let second = seed_retrospective(&state, user_id, "두 번째").await;

    for order in [RetrospectivesOrderType::Oldest, RetrospectivesOrderType::Previously] {
        // Act
        let query = GetRetrospectivesQuery {
            order: Some(order),
            ..Default::default()
        };
        let result = RetrospectiveService::get_retrospectives(state.clone(), query)
            .await
            .unwrap();

        // Assert
        let ids: Vec<i64> = result.data.iter().map(|r| r.retrospective_id).collect();
        assert_eq!(ids, vec![first, second]);
    }
}

#[tokio::test]
async fn should_filter_by_keyword_and_ignore_blank_keyword() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let sprint = seed_retrospective(&state, user_id, "스프린트 회고").await;
    seed_retrospective(&state, user_id, "월간 정리").await;

    // Act
    let filtered = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            keyword: Some("스프린트".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let blank = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            keyword: Some("   ".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(filtered.total_count, 1);
    assert_eq!(filtered.data[0].retrospective_id, sprint);
    assert_eq!(blank.total_count, 2);
}

#[tokio::test]
async fn should_filter_by_owner() {
    // Arrange
    let state = setup_state().await;
    let alice = seed_user(&state, "alice").await;
    let bob = seed_user(&state, "bob").await;
    seed_retrospective(&state, alice, "앨리스 회고").await;
    let bobs = seed_retrospective(&state, bob, "밥 회고").await;

    // Act
    let result = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            user_id: Some(bob),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.total_count, 1);
    assert_eq!(result.data[0].retrospective_id, bobs);
    assert_eq!(result.data[0].user_id, bob);
}

#[tokio::test]
async fn should_return_only_bookmarked_when_is_bookmarked_is_true() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let other = seed_user(&state, "bob").await;
    let marked = seed_retrospective(&state, user_id, "북마크 회고").await;
    seed_retrospective(&state, user_id, "일반 회고").await;
    let marked_by_other = seed_retrospective(&state, user_id, "다른 사용자 북마크").await;
    RetrospectiveService::toggle_bookmark(state.clone(), marked, user_id)
        .await
        .unwrap();
    RetrospectiveService::toggle_bookmark(state.clone(), marked_by_other, other)
        .await
        .unwrap();

    // Act
    let result = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            user_id: Some(user_id),
            is_bookmarked: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.total_count, 1);
    assert_eq!(result.data[0].retrospective_id, marked);
    assert!(result.data[0].is_bookmarked);
    assert!(result.has_bookmarks_by_user);
    assert!(result
        .data
        .iter()
        .all(|r| r.retrospective_id != marked_by_other));
}

#[tokio::test]
async fn should_mark_rows_bookmarked_by_viewer_without_filtering() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let marked = seed_retrospective(&state, user_id, "북마크 회고").await;
    let plain = seed_retrospective(&state, user_id, "일반 회고").await;
    RetrospectiveService::toggle_bookmark(state.clone(), marked, user_id)
        .await
        .unwrap();

    // Act
    let result = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            user_id: Some(user_id),
            is_bookmarked: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.total_count, 2);
    let row = |id: i64| result.data.iter().find(|r| r.retrospective_id == id).unwrap();
    assert!(row(marked).is_bookmarked);
    assert!(!row(plain).is_bookmarked);
}

#[tokio::test]
async fn should_reject_bookmark_filter_without_user() {
    // Arrange
    let state = setup_state().await;

    // Act
    let result = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            is_bookmarked: Some(true),
            ..Default::default()
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn should_paginate_and_return_empty_page_past_the_end() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    for i in 0..5 {
        seed_retrospective(&state, user_id, &format!("회고 {}", i)).await;
    }

    // Act
    let second_page = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            page: Some(1),
            size: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let beyond = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            page: Some(10),
            size: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(second_page.data.len(), 2);
    assert_eq!(second_page.total_count, 5);
    assert_eq!(second_page.total_pages, 3);
    assert_eq!(second_page.current_page, 1);
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total_count, 5);
}

#[tokio::test]
async fn should_reject_page_size_out_of_range() {
    // Arrange
    let state = setup_state().await;

    // Act
    let result = RetrospectiveService::get_retrospectives(
        state.clone(),
        GetRetrospectivesQuery {
            size: Some(0),
            ..Default::default()
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

// ============== 수정 ==============

#[tokio::test]
async fn should_update_only_supplied_fields() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let mut req = personal_request(user_id, "원래 제목");
    req.description = Some("원래 설명".to_string());
    let created = RetrospectiveService::create_retrospective(state.clone(), req)
        .await
        .unwrap();

    // Act
    let updated = RetrospectiveService::update_retrospective(
        state.clone(),
        created.id,
        UpdateRetrospectiveRequest {
            status: Some(ProjectStatus::Complete),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(updated.title, "원래 제목");
    assert_eq!(updated.description.as_deref(), Some("원래 설명"));
    assert_eq!(updated.status, ProjectStatus::Complete);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_retrospective() {
    // Arrange
    let state = setup_state().await;

    // Act
    let result = RetrospectiveService::update_retrospective(
        state.clone(),
        42,
        UpdateRetrospectiveRequest {
            title: Some("새 제목".to_string()),
            ..Default::default()
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// ============== 삭제 ==============

#[tokio::test]
async fn should_delete_retrospective_with_bookmarks_and_sections() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let retrospective_id = seed_retrospective(&state, user_id, "삭제할 회고").await;
    RetrospectiveService::toggle_bookmark(state.clone(), retrospective_id, user_id)
        .await
        .unwrap();
    SectionService::create_section(
        state.clone(),
        CreateSectionRequest {
            retrospective_id,
            user_id,
            category: "KEEP".to_string(),
            content: "좋았던 점".to_string(),
        },
    )
    .await
    .unwrap();

    // Act
    RetrospectiveService::delete_retrospective(state.clone(), retrospective_id, user_id)
        .await
        .unwrap();

    // Assert
    let found = RetrospectiveService::get_retrospective(state.clone(), retrospective_id, None).await;
    assert!(matches!(found, Err(AppError::NotFound(_))));
    let sections = section::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(sections, 0);
}

#[tokio::test]
async fn should_reject_delete_by_non_owner() {
    // Arrange
    let state = setup_state().await;
    let owner = seed_user(&state, "alice").await;
    let other = seed_user(&state, "bob").await;
    let retrospective_id = seed_retrospective(&state, owner, "앨리스 회고").await;

    // Act
    let result =
        RetrospectiveService::delete_retrospective(state.clone(), retrospective_id, other).await;

    // Assert
    assert!(matches!(result, Err(AppError::InvalidOperation(_))));
    let still_there =
        RetrospectiveService::get_retrospective(state.clone(), retrospective_id, None).await;
    assert!(still_there.is_ok());
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_retrospective() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;

    // Act
    let result = RetrospectiveService::delete_retrospective(state.clone(), 999, user_id).await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
