use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub operation_name: String, // 'Buying', 'Borrowing'
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::book_management::Entity")]
    BookManagement,
}

impl Related<super::book_management::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookManagement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
