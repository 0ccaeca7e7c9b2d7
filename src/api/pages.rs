//! Page controller: picks the session's active page and renders it

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Redirect, Response},
    Form,
};
use serde::Deserialize;
use tera::Context;

use super::render::{self, Notice, PageError};
use super::session::CurrentSession;
use super::{authors, books, borrow_buy, categories, operations, reviews, search, wishlist};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::session::{PageId, SessionState};

/// Inputs carried by the GET forms of individual pages
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub author: Option<String>,
    pub book: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    pub page: PageId,
}

/// GET / - render whichever page the session is on
pub async fn show_current_page(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    let page = state.sessions.snapshot(session.id).current_page();
    render(&state, session, page, &query, None, StatusCode::OK).await
}

/// POST /navigate - single jump to another page, including "Back to Home"
pub async fn navigate(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<NavigateForm>,
) -> Response {
    state
        .sessions
        .with_session(session.id, |s| s.navigate(form.page));
    tracing::debug!("Session {} navigated to {}", session.id, form.page);
    session.respond(Redirect::to("/"))
}

async fn page_context(
    state: &AppState,
    session: &SessionState,
    page: PageId,
    query: &PageQuery,
) -> Result<Context, DomainError> {
    match page {
        PageId::Home => Ok(Context::new()),
        PageId::Categories => categories::context(state).await,
        PageId::Search => search::context(state, query.q.as_deref()).await,
        PageId::Authors => authors::context(state, query.author.as_deref()).await,
        PageId::Books => books::context(state).await,
        PageId::Wishlist => Ok(wishlist::context(session)),
        PageId::Reviews => reviews::context(state, query.book.as_deref()).await,
        PageId::BorrowBuy => borrow_buy::context(state, query.book.as_deref()).await,
        PageId::Operations => operations::context(state).await,
    }
}

/// Render `page` for this session only; no other page logic runs
pub(crate) async fn render(
    state: &AppState,
    session: CurrentSession,
    page: PageId,
    query: &PageQuery,
    notice: Option<Notice>,
    status: StatusCode,
) -> Result<Response, PageError> {
    let snapshot = state.sessions.snapshot(session.id);
    let context = page_context(state, &snapshot, page, query).await?;
    let html = render::render_page(&state.templates, page, context, notice)?;
    Ok(session.respond((status, html)))
}

/// User-correctable failures become a warning on the re-rendered page;
/// anything else aborts the action.
pub(crate) fn notice_for(err: DomainError) -> Result<(StatusCode, Notice), PageError> {
    match err {
        DomainError::Validation(msg) => Ok((StatusCode::OK, Notice::warning(msg))),
        DomainError::NotFound(what) => Ok((
            StatusCode::NOT_FOUND,
            Notice::warning(format!("Could not find {}.", what)),
        )),
        other => Err(PageError(other)),
    }
}

/// The requested option when it is still offered, else the first one
pub(crate) fn select_or_first(options: &[String], requested: Option<&str>) -> Option<String> {
    requested
        .map(str::trim)
        .filter(|r| options.iter().any(|o| o == r))
        .map(str::to_string)
        .or_else(|| options.first().cloned())
}
