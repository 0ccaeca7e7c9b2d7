use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Book;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub publication_date: Option<String>,
    #[sea_orm(default_value = "Available")]
    pub availability_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::book_management::Entity")]
    BookManagement,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::book_management::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookManagement.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_authors::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_authors::Relation::Book.def().rev())
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_categories::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_categories::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            publication_date: model.publication_date,
            availability_status: model.availability_status,
        }
    }
}
