//! Session state
//!
//! Each browser session owns a `SessionState` (current page and wishlist)
//! kept in the process-local `SessionStore`. Nothing here touches the
//! database; wishlist entries vanish with the session.

pub mod page;
pub mod state;
pub mod store;

pub use page::PageId;
pub use state::{BookSnapshot, SessionState, WishlistAddition};
pub use store::{SessionId, SessionStore};
