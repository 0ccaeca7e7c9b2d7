pub mod authors;
pub mod books;
pub mod borrow_buy;
pub mod categories;
pub mod health;
pub mod operations;
pub mod pages;
pub mod render;
pub mod reviews;
pub mod search;
pub mod session;
pub mod wishlist;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::show_current_page))
        .route("/navigate", post(pages::navigate))
        // Session wishlist
        .route("/wishlist", post(wishlist::add))
        .route("/wishlist/remove", post(wishlist::remove))
        // Catalog writes
        .route("/reviews", post(reviews::add))
        .route("/operations", post(borrow_buy::record))
        // Health check
        .route("/api/health", get(health::health_check))
        .with_state(state)
}
