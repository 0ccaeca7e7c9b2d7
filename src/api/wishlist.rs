//! Wishlist page and the add/remove actions

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Form,
};
use serde::Deserialize;
use tera::Context;

use super::pages::{self, PageQuery};
use super::render::{Notice, PageError};
use super::session::CurrentSession;
use crate::infrastructure::AppState;
use crate::session::{BookSnapshot, PageId, SessionState, WishlistAddition};

#[derive(Debug, Deserialize)]
pub struct AddToWishlistForm {
    pub book_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromWishlistForm {
    pub index: usize,
}

pub fn context(session: &SessionState) -> Context {
    let mut context = Context::new();
    context.insert("wishlist", session.wishlist());
    context
}

/// POST /wishlist - snapshot a book into the wishlist, then re-render the active page
pub async fn add(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<AddToWishlistForm>,
) -> Result<Response, PageError> {
    let (status, notice) = match state.book_repo.find_by_id(form.book_id).await? {
        Some(book) => {
            let snapshot = BookSnapshot::from(book);
            let name = snapshot.name.clone();
            let notice = match state
                .sessions
                .with_session(session.id, |s| s.add_to_wishlist(snapshot))
            {
                WishlistAddition::Added => {
                    Notice::success(format!("{} has been added to your wishlist!", name))
                }
                WishlistAddition::Duplicate => {
                    Notice::warning("This book is already in your wishlist.")
                }
            };
            (StatusCode::OK, notice)
        }
        None => (
            StatusCode::NOT_FOUND,
            Notice::warning("That book is no longer in the catalog."),
        ),
    };

    let page = state.sessions.snapshot(session.id).current_page();
    pages::render(
        &state,
        session,
        page,
        &PageQuery::default(),
        Some(notice),
        status,
    )
    .await
}

/// POST /wishlist/remove - drop the entry at a position; a stale position changes nothing
pub async fn remove(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<RemoveFromWishlistForm>,
) -> Result<Response, PageError> {
    let removed = state.sessions.with_session(session.id, |s| {
        s.navigate(PageId::Wishlist);
        s.remove_from_wishlist(form.index)
    });

    let notice = match removed {
        Some(book) => Notice::success(format!(
            "{} has been removed from your wishlist!",
            book.name
        )),
        None => Notice::warning("That wishlist entry was already removed."),
    };

    pages::render(
        &state,
        session,
        PageId::Wishlist,
        &PageQuery::default(),
        Some(notice),
        StatusCode::OK,
    )
    .await
}
