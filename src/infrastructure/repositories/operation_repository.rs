//! SeaORM implementation of OperationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use crate::domain::{DomainError, NewOperation, OperationRecord, OperationRepository};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::book_management::{
    self, ActiveModel as LinkActiveModel, Column as LinkColumn,
};
use crate::models::operation::{self, ActiveModel, Column, Entity as OperationEntity};

#[derive(Debug, FromQueryResult)]
struct OperationRow {
    id: i32,
    operation_name: String,
    start_date: String,
    end_date: Option<String>,
    book_id: i32,
    book_name: String,
}

impl From<OperationRow> for OperationRecord {
    fn from(row: OperationRow) -> Self {
        Self {
            id: row.id,
            operation_name: row.operation_name,
            start_date: row.start_date,
            end_date: row.end_date,
            book_id: row.book_id,
            book_name: row.book_name,
        }
    }
}

/// SeaORM-based implementation of OperationRepository
pub struct SeaOrmOperationRepository {
    db: DatabaseConnection,
}

impl SeaOrmOperationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Both inserts run on the caller's transaction; neither is visible until commit.
async fn insert_linked(
    txn: &DatabaseTransaction,
    input: &NewOperation,
) -> Result<operation::Model, DbErr> {
    let saved = ActiveModel {
        operation_name: Set(input.kind.as_str().to_owned()),
        start_date: Set(input.start_date.clone()),
        end_date: Set(input.end_date.clone()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    LinkActiveModel {
        operation_id: Set(saved.id),
        book_id: Set(input.book_id),
    }
    .insert(txn)
    .await?;

    Ok(saved)
}

#[async_trait]
impl OperationRepository for SeaOrmOperationRepository {
    async fn record(&self, input: NewOperation) -> Result<OperationRecord, DomainError> {
        let book = BookEntity::find_by_id(input.book_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("book #{}", input.book_id)))?;

        let txn = self.db.begin().await?;

        let saved = match insert_linked(&txn, &input).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!(
                    "Recording {} for book #{} failed, rolling back: {}",
                    input.kind.as_str(),
                    input.book_id,
                    e
                );
                txn.rollback().await?;
                return Err(e.into());
            }
        };

        txn.commit().await?;

        Ok(OperationRecord {
            id: saved.id,
            operation_name: saved.operation_name,
            start_date: saved.start_date,
            end_date: saved.end_date,
            book_id: book.id,
            book_name: book.name,
        })
    }

    async fn find_all(&self) -> Result<Vec<OperationRecord>, DomainError> {
        let rows = OperationEntity::find()
            .select_only()
            .column_as(Column::Id, "id")
            .column_as(Column::OperationName, "operation_name")
            .column_as(Column::StartDate, "start_date")
            .column_as(Column::EndDate, "end_date")
            .column_as(LinkColumn::BookId, "book_id")
            .column_as(BookColumn::Name, "book_name")
            .join(JoinType::InnerJoin, operation::Relation::BookManagement.def())
            .join(JoinType::InnerJoin, book_management::Relation::Book.def())
            .order_by_asc(Column::Id)
            .into_model::<OperationRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(OperationRecord::from).collect())
    }
}
