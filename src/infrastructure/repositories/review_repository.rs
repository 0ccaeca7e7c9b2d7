//! SeaORM implementation of ReviewRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, NewReview, Review, ReviewRepository};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::review::{ActiveModel, Column, Entity as ReviewEntity};

/// SeaORM-based implementation of ReviewRepository
pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn find_by_book_name(&self, book_name: &str) -> Result<Vec<Review>, DomainError> {
        let reviews = ReviewEntity::find()
            .inner_join(BookEntity)
            .filter(BookColumn::Name.eq(book_name))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from).collect())
    }

    async fn create(&self, review: NewReview) -> Result<Review, DomainError> {
        let book = BookEntity::find()
            .filter(BookColumn::Name.eq(review.book_name.as_str()))
            .order_by_asc(BookColumn::Id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("book '{}'", review.book_name)))?;

        let new_review = ActiveModel {
            book_id: Set(book.id),
            reviewer: Set(review.reviewer),
            rating: Set(review.rating),
            comment: Set(review.comment),
            review_date: Set(review.review_date),
            ..Default::default()
        };

        let saved = new_review.insert(&self.db).await?;

        Ok(Review::from(saved))
    }
}
