use serde::Serialize;

use super::page::PageId;
use crate::domain::Book;

/// Display fields of a book captured when it was added to the wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSnapshot {
    pub book_id: i32,
    pub name: String,
    pub publication_date: Option<String>,
    pub availability_status: String,
}

impl From<Book> for BookSnapshot {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.id,
            name: book.name,
            publication_date: book.publication_date,
            availability_status: book.availability_status,
        }
    }
}

/// Result of `SessionState::add_to_wishlist`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistAddition {
    Added,
    Duplicate,
}

/// Per-session page state; never persisted
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    current_page: PageId,
    wishlist: Vec<BookSnapshot>,
}

impl SessionState {
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn navigate(&mut self, page: PageId) {
        self.current_page = page;
    }

    pub fn back_to_home(&mut self) {
        self.navigate(PageId::Home);
    }

    pub fn wishlist(&self) -> &[BookSnapshot] {
        &self.wishlist
    }

    pub fn add_to_wishlist(&mut self, book: BookSnapshot) -> WishlistAddition {
        if self.wishlist.contains(&book) {
            return WishlistAddition::Duplicate;
        }
        self.wishlist.push(book);
        WishlistAddition::Added
    }

    /// Removes the entry at `index`. A stale index is a no-op.
    pub fn remove_from_wishlist(&mut self, index: usize) -> Option<BookSnapshot> {
        if index < self.wishlist.len() {
            Some(self.wishlist.remove(index))
        } else {
            None
        }
    }
}
