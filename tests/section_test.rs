//! 회고 섹션 테스트
//!
//! 테스트 대상:
//! - 섹션 생성 / 내용 수정 / 좋아요 증가 / 삭제

mod common;

use common::{seed_retrospective, seed_user, setup_state};
use retrospective_server::domain::section::dto::{
    CreateSectionRequest, EditSectionRequest, IncreaseSectionLikesRequest,
};
use retrospective_server::domain::section::entity::{section, section_like};
use retrospective_server::domain::section::SectionService;
use retrospective_server::utils::error::AppError;
use retrospective_server::AppState;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn seed_section(state: &AppState, retrospective_id: i64, user_id: i64) -> i64 {
    SectionService::create_section(
        state.clone(),
        CreateSectionRequest {
            retrospective_id,
            user_id,
            category: "KEEP".to_string(),
            content: "데일리 스크럼이 좋았다".to_string(),
        },
    )
    .await
    .unwrap()
    .section_id
}

#[tokio::test]
async fn should_create_section_with_zero_likes() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let retrospective_id = seed_retrospective(&state, user_id, "회고").await;

    // Act
    let result = SectionService::create_section(
        state.clone(),
        CreateSectionRequest {
            retrospective_id,
            user_id,
            category: "PROBLEM".to_string(),
            content: "배포가 늦었다".to_string(),
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.retrospective_id, retrospective_id);
    assert_eq!(result.category, "PROBLEM");
    assert_eq!(result.like_count, 0);
}

#[tokio::test]
async fn should_return_not_found_when_creating_section_for_missing_retrospective() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;

    // Act
    let result = SectionService::create_section(
        state.clone(),
        CreateSectionRequest {
            retrospective_id: 999,
            user_id,
            category: "KEEP".to_string(),
            content: "내용".to_string(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_replace_section_content() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let retrospective_id = seed_retrospective(&state, user_id, "회고").await;
    let section_id = seed_section(&state, retrospective_id, user_id).await;

    // Act
    let result = SectionService::update_section_content(
        state.clone(),
        section_id,
        EditSectionRequest {
            content: "수정된 내용".to_string(),
        },
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.section_id, section_id);
    assert_eq!(result.content, "수정된 내용");
    let stored = section::Entity::find_by_id(section_id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.content, "수정된 내용");
}

#[tokio::test]
async fn should_return_not_found_when_editing_missing_section() {
    // Arrange
    let state = setup_state().await;

    // Act
    let result = SectionService::update_section_content(
        state.clone(),
        999,
        EditSectionRequest {
            content: "내용".to_string(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_increase_likes_on_every_call() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let retrospective_id = seed_retrospective(&state, user_id, "회고").await;
    let section_id = seed_section(&state, retrospective_id, user_id).await;

    // Act
    let mut counts = Vec::new();
    for _ in 0..3 {
        let result = SectionService::increase_section_likes(
            state.clone(),
            section_id,
            IncreaseSectionLikesRequest { user_id },
        )
        .await
        .unwrap();
        counts.push(result.like_count);
    }

    // Assert
    assert_eq!(counts, vec![1, 2, 3]);
    let history = section_like::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(history, 3);
}

#[tokio::test]
async fn should_return_not_found_when_liking_missing_section() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;

    // Act
    let result = SectionService::increase_section_likes(
        state.clone(),
        999,
        IncreaseSectionLikesRequest { user_id },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn should_delete_section_and_like_history() {
    // Arrange
    let state = setup_state().await;
    let user_id = seed_user(&state, "alice").await;
    let retrospective_id = seed_retrospective(&state, user_id, "회고").await;
    let section_id = seed_section(&state, retrospective_id, user_id).await;
    SectionService::increase_section_likes(
        state.clone(),
        section_id,
        IncreaseSectionLikesRequest { user_id },
    )
    .await
    .unwrap();

    // Act
    SectionService::delete_section(state.clone(), section_id)
        .await
        .unwrap();

    // Assert
    let sections = section::Entity::find().count(&state.db).await.unwrap();
    let likes = section_like::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(sections, 0);
    assert_eq!(likes, 0);
    let again = SectionService::delete_section(state.clone(), section_id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}
