//! Reviews page and the "Add Review" action

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Form,
};
use tera::Context;

use super::pages::{self, select_or_first, PageQuery};
use super::render::{Notice, PageError};
use super::session::CurrentSession;
use crate::domain::{DomainError, Review};
use crate::infrastructure::AppState;
use crate::services::review_service::{self, ReviewForm, MAX_RATING, MIN_RATING};
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

    let reviews: Vec<Review> = match &selected {
        Some(name) => state.review_repo.find_by_book_name(name).await?,
        None => Vec::new(),
    };
    let ratings: Vec<i32> = (MIN_RATING..=MAX_RATING).collect();

    let mut context = Context::new();
    context.insert("books", &books);
    context.insert("selected_book", &selected.unwrap_or_default());
    context.insert("reviews", &reviews);
    context.insert("ratings", &ratings);
    Ok(context)
}

/// POST /reviews
pub async fn add(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<ReviewForm>,
) -> Result<Response, PageError> {
    let query = PageQuery {
        book: Some(form.book.clone()),
        ..Default::default()
    };

    let (status, notice) =
        match review_service::submit_review(state.review_repo.as_ref(), form).await {
            Ok(_) => (
                StatusCode::OK,
                Notice::success("Your review has been added successfully!"),
            ),
            Err(e) => pages::notice_for(e)?,
        };

    state
        .sessions
        .with_session(session.id, |s| s.navigate(PageId::Reviews));
    pages::render(&state, session, PageId::Reviews, &query, Some(notice), status).await
}
