use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Review;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_id: i32,
    pub reviewer: String,
    pub rating: i32, // 1-5
    pub comment: String,
    pub review_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            book_id: model.book_id,
            reviewer: model.reviewer,
            rating: model.rating,
            comment: model.comment,
            review_date: model.review_date,
        }
    }
}
