use std::time::Duration;

use chrono::Utc;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Schema, Set, Statement,
};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    bookmark::entity::bookmark,
    retrospective::entity::{retrospective, retrospective_template},
    section::entity::{section, section_like},
    team::entity::{team, user_team},
    user::entity::user,
};

/// 기본 회고 템플릿 이름
pub const DEFAULT_TEMPLATES: [&str; 2] = ["KPT", "KUDOS"];

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Successfully connected to the database.");

    if config.db_schema_update {
        sync_schema(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// 엔티티 정의로부터 테이블과 인덱스를 생성하고 기본 템플릿을 채웁니다.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // 외래 키 순서대로 생성 (부모 먼저)

    // 1. Independent Entities
    create_table_if_not_exists(db, &schema, user::Entity).await?;
    create_table_if_not_exists(db, &schema, team::Entity).await?;
    create_table_if_not_exists(db, &schema, retrospective_template::Entity).await?;

    // 2. Dependent Entities (Level 1)
    create_table_if_not_exists(db, &schema, user_team::Entity).await?;
    create_table_if_not_exists(db, &schema, retrospective::Entity).await?;

    // 3. Dependent Entities (Level 2)
    create_table_if_not_exists(db, &schema, bookmark::Entity).await?;
    create_table_if_not_exists(db, &schema, section::Entity).await?;

    // 4. Dependent Entities (Level 3)
    create_table_if_not_exists(db, &schema, section_like::Entity).await?;

    create_index_if_not_exists(
        db,
        "idx_retrospective_created_at",
        "retrospective",
        &["created_at"],
        false,
    )
    .await?;
    create_index_if_not_exists(
        db,
        "uq_bookmark_user_retrospective",
        "bookmark",
        &["user_id", "retrospective_id"],
        true,
    )
    .await?;

    seed_templates(db).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn seed_templates(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = retrospective_template::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    let now = Utc::now().naive_utc();
    let templates = DEFAULT_TEMPLATES
        .iter()
        .map(|name| retrospective_template::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            ..Default::default()
        });

    retrospective_template::Entity::insert_many(templates)
        .exec(db)
        .await?;

    info!(count = DEFAULT_TEMPLATES.len(), "Seeded default retrospective templates");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
    unique: bool,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let kind = if unique { "UNIQUE INDEX" } else { "INDEX" };
    let sql = format!("CREATE {} {} ON {} ({})", kind, index_name, table_name, cols);
    let stmt = Statement::from_string(backend, sql);

    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignore duplicate index errors for idempotency.
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table: {}", e);
        e
    })
}
