use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "retrospective_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub template_id: i64,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::retrospective::Entity")]
    Retrospective,
}

impl Related<super::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
