//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite에 스키마를 만들고 `AppState`를 구성합니다.
//! 커넥션을 하나만 쓰므로 트랜잭션 안의 쿼리는 모두 같은 커넥션을 재사용합니다.

#![allow(dead_code)]

use chrono::Utc;
use retrospective_server::config::{sync_schema, AppConfig};
use retrospective_server::domain::retrospective::dto::{
    CreateRetrospectiveRequest, RetrospectiveType,
};
use retrospective_server::domain::retrospective::RetrospectiveService;
use retrospective_server::domain::user::entity::user;
use retrospective_server::AppState;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

pub const KPT_TEMPLATE_ID: i64 = 1;

pub async fn setup_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("sqlite 연결 실패");
    sync_schema(&db).await.expect("스키마 생성 실패");

    AppState {
        db,
        config: AppConfig {
            server_port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_schema_update: true,
            db_max_connections: 1,
            log_dir: "logs".to_string(),
        },
    }
}

pub async fn seed_user(state: &AppState, username: &str) -> i64 {
    let saved = user::ActiveModel {
        username: Set(username.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("사용자 생성 실패");

    saved.user_id
}

pub fn personal_request(user_id: i64, title: &str) -> CreateRetrospectiveRequest {
    CreateRetrospectiveRequest {
        title: title.to_string(),
        user_id,
        template_id: KPT_TEMPLATE_ID,
        retrospective_type: RetrospectiveType::Personal,
        status: None,
        thumbnail: None,
        description: None,
        start_date: None,
    }
}

pub async fn seed_retrospective(state: &AppState, user_id: i64, title: &str) -> i64 {
    RetrospectiveService::create_retrospective(state.clone(), personal_request(user_id, title))
        .await
        .expect("회고 생성 실패")
        .id
}
