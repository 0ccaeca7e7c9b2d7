//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{Book, BookRepository, DomainError};
use crate::models::book::{Column, Entity as BookEntity};

/// Wildcards typed by the user match literally
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Book>, DomainError> {
        let pattern = format!("%{}%", escape_like(query));
        let books = BookEntity::find()
            .filter(Expr::col(Column::Name).like(LikeExpr::new(pattern).escape('\\')))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await?;

        Ok(book.map(Book::from))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;

        Ok(book.map(Book::from))
    }
}
