//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};

use crate::domain::{Book, Category, CategoryRepository, DomainError};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::category::{Column, Entity as CategoryEntity};

/// SeaORM-based implementation of CategoryRepository
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = CategoryEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(categories
            .into_iter()
            .map(|c| Category {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    async fn find_books(&self, category_id: i32) -> Result<Vec<Book>, DomainError> {
        // An unknown category simply has no books
        let Some(category) = CategoryEntity::find_by_id(category_id)
            .one(&self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let books = category
            .find_related(BookEntity)
            .order_by_asc(BookColumn::Name)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }
}
