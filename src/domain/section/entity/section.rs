use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub section_id: i64,
    pub retrospective_id: i64,
    /// 작성자
    pub user_id: i64,
    /// KEEP, PROBLEM, TRY 등 템플릿별 분류
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::retrospective::Entity",
        from = "Column::RetrospectiveId",
        to = "crate::domain::retrospective::entity::retrospective::Column::RetrospectiveId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Retrospective,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(has_many = "super::section_like::Entity")]
    SectionLike,
}

impl Related<crate::domain::retrospective::entity::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl Related<crate::domain::user::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::section_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionLike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
