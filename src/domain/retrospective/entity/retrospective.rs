use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 회고 진행 상태
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// 시작 전
    #[sea_orm(string_value = "NOT_STARTED")]
    NotStarted,
    /// 진행 중
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    /// 완료
    #[sea_orm(string_value = "COMPLETE")]
    Complete,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "retrospective")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub retrospective_id: i64,
    pub title: String,
    /// 팀 회고일 때만 존재
    pub team_id: Option<i64>,
    pub user_id: i64,
    pub template_id: i64,
    pub status: ProjectStatus,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::team::entity::team::Entity",
        from = "Column::TeamId",
        to = "crate::domain::team::entity::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Team,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::retrospective_template::Entity",
        from = "Column::TemplateId",
        to = "super::retrospective_template::Column::TemplateId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Template,
    #[sea_orm(has_many = "crate::domain::bookmark::entity::bookmark::Entity")]
    Bookmark,
    #[sea_orm(has_many = "crate::domain::section::entity::section::Entity")]
    Section,
}

impl Related<crate::domain::team::entity::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<crate::domain::user::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::retrospective_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl Related<crate::domain::bookmark::entity::bookmark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookmark.def()
    }
}

impl Related<crate::domain::section::entity::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
