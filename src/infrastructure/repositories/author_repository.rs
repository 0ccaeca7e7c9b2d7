//! SeaORM implementation of AuthorRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use crate::domain::{Author, AuthorRepository, Book, DomainError};
use crate::models::author::{Column, Entity as AuthorEntity};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(authors
            .into_iter()
            .map(|a| Author {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    async fn find_books_by_name(&self, author_name: &str) -> Result<Vec<Book>, DomainError> {
        let authors = AuthorEntity::find()
            .filter(Column::Name.eq(author_name))
            .all(&self.db)
            .await?;

        // Several authors may share a name; a co-written book is listed once
        let mut seen = HashSet::new();
        let mut books = Vec::new();
        for author in authors {
            let related = author
                .find_related(BookEntity)
                .order_by_asc(BookColumn::Name)
                .all(&self.db)
                .await?;

            books.extend(
                related
                    .into_iter()
                    .filter(|b| seen.insert(b.id))
                    .map(Book::from),
            );
        }

        books.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(books)
    }
}
