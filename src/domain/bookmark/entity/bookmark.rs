use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 사용자가 회고를 북마크했음을 나타냄. (user_id, retrospective_id) 유니크
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookmark")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub bookmark_id: i64,
    pub user_id: i64,
    pub retrospective_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::retrospective::Entity",
        from = "Column::RetrospectiveId",
        to = "crate::domain::retrospective::entity::retrospective::Column::RetrospectiveId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Retrospective,
}

impl Related<crate::domain::user::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::domain::retrospective::entity::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
