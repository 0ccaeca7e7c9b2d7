//! Operation Service - Buy and Borrow submissions

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::domain::{
    BookRepository, DomainError, NewOperation, OperationKind, OperationRecord, OperationRepository,
};
use crate::services::review_service::FILL_IN_ALL_FIELDS;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw Borrow & Buy form as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

fn parse_date(value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(FILL_IN_ALL_FIELDS.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| DomainError::Validation(format!("'{}' is not a YYYY-MM-DD date.", value)))
}

/// Resolves the dates an operation is logged with.
/// A purchase starts today and has no end; a loan needs both dates.
fn operation_dates(
    kind: OperationKind,
    form: &OperationForm,
) -> Result<(String, Option<String>), DomainError> {
    match kind {
        OperationKind::Buy => Ok((Local::now().format(DATE_FORMAT).to_string(), None)),
        OperationKind::Borrow => {
            let start = parse_date(&form.start_date)?;
            let end = parse_date(&form.end_date)?;
            Ok((start, Some(end)))
        }
    }
}

/// Logs a Buy or Borrow for the named book.
///
/// Availability is left untouched; the operation is only recorded.
pub async fn submit_operation(
    books: &dyn BookRepository,
    operations: &dyn OperationRepository,
    form: OperationForm,
) -> Result<OperationRecord, DomainError> {
    let book_name = form.book.trim();
    if book_name.is_empty() || form.operation.trim().is_empty() {
        return Err(DomainError::Validation(FILL_IN_ALL_FIELDS.to_string()));
    }

    let kind: OperationKind = form.operation.parse()?;
    let (start_date, end_date) = operation_dates(kind, &form)?;

    let book = books
        .find_by_name(book_name)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("book '{}'", book_name)))?;

    let record = operations
        .record(NewOperation {
            book_id: book.id,
            kind,
            start_date,
            end_date,
        })
        .await?;

    tracing::info!(
        "Operation #{} ({}) logged for '{}'",
        record.id,
        record.operation_name,
        record.book_name
    );
    Ok(record)
}
