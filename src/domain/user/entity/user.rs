use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 외부 인증 흐름에서 생성된 사용자. 이 서비스는 조회만 합니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::retrospective::entity::retrospective::Entity")]
    Retrospective,
    #[sea_orm(has_many = "crate::domain::team::entity::user_team::Entity")]
    UserTeam,
    #[sea_orm(has_many = "crate::domain::bookmark::entity::bookmark::Entity")]
    Bookmark,
}

impl Related<crate::domain::retrospective::entity::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl Related<crate::domain::team::entity::user_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserTeam.def()
    }
}

impl Related<crate::domain::bookmark::entity::bookmark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookmark.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
