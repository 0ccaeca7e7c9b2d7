//! Borrow & Buy page and the action logging an operation

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Form,
};
use chrono::Local;
use tera::Context;

use super::pages::{self, select_or_first, PageQuery};
use super::render::{Notice, PageError};
use super::session::CurrentSession;
use crate::domain::{DomainError, OperationKind};
use crate::infrastructure::AppState;
use crate::services::operation_service::{self, OperationForm};
use crate::session::PageId;

pub async fn context(state: &AppState, requested: Option<&str>) -> Result<Context, DomainError> {
    let books: Vec<String> = state
        .book_repo
        .find_all()
        .await?
        .into_iter()
        .map(|b| b.name)
        .collect();
    let selected = select_or_first(&books, requested);

    let book = match &selected {
        Some(name) => state.book_repo.find_by_name(name).await?,
        None => None,
    };

    let mut context = Context::new();
    context.insert("books", &books);
    context.insert("selected_book", &selected.unwrap_or_default());
    context.insert("book", &book);
    context.insert("today", &Local::now().format("%Y-%m-%d").to_string());
    Ok(context)
}

/// POST /operations
pub async fn record(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<OperationForm>,
) -> Result<Response, PageError> {
    let query = PageQuery {
        book: Some(form.book.clone()),
        ..Default::default()
    };

    let result = operation_service::submit_operation(
        state.book_repo.as_ref(),
        state.operation_repo.as_ref(),
        form,
    )
    .await;

    let (status, notice) = match result {
        Ok(record) => {
            let verb = if record.operation_name == OperationKind::Buy.as_str() {
                "purchased"
            } else {
                "borrowed"
            };
            (
                StatusCode::OK,
                Notice::success(format!(
                    "{} has been {} successfully!",
                    record.book_name, verb
                )),
            )
        }
        Err(e) => pages::notice_for(e)?,
    };

    state
        .sessions
        .with_session(session.id, |s| s.navigate(PageId::BorrowBuy));
    pages::render(&state, session, PageId::BorrowBuy, &query, Some(notice), status).await
}
