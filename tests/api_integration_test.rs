//! Integration tests for the page routes, driven through the router

mod common;

use axum::http::StatusCode;
use common::{
    create_test_author, create_test_book, create_test_category, page_uri, setup_test_state,
    TestBrowser,
};
use online_library::models::{book_management, operation, review};
use online_library::session::PageId;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn test_first_visit_lands_on_home() {
    let state = setup_test_state().await;
    let mut browser = TestBrowser::new(state.clone());

    let (status, body) = browser.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to My Online Library!"));
    for page in PageId::destinations() {
        assert!(
            body.contains(&format!("value=\"{}\"", page.slug())),
            "Home is missing a button for {}",
            page
        );
    }
    assert_eq!(
        state.sessions.snapshot(browser.session_id()).current_page(),
        PageId::Home
    );
}

#[tokio::test]
async fn test_every_page_leads_back_to_home() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    for page in PageId::destinations() {
        let (status, body) = browser.open(page.slug()).await;
        assert_eq!(status, StatusCode::OK, "{} did not render", page);
        assert!(!body.contains("Welcome to My Online Library!"));
        assert!(body.contains("name=\"page\" value=\"home\""));
        assert_eq!(
            state.sessions.snapshot(browser.session_id()).current_page(),
            page
        );

        let (status, body) = browser.open("home").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome to My Online Library!"));
        assert_eq!(
            state.sessions.snapshot(browser.session_id()).current_page(),
            PageId::Home
        );
    }
}

#[tokio::test]
async fn test_sessions_do_not_share_pages_or_wishlists() {
    let state = setup_test_state().await;
    let dune = create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut alice = TestBrowser::new(state.clone());
    let mut bob = TestBrowser::new(state.clone());

    alice.open("books").await;
    alice
        .post_form("/wishlist", &[("book_id", &dune.to_string())])
        .await;
    let (_, body) = bob.get("/").await;

    assert!(body.contains("Welcome to My Online Library!"));
    assert_ne!(alice.session_id(), bob.session_id());
    assert!(state.sessions.snapshot(bob.session_id()).wishlist().is_empty());
    assert_eq!(state.sessions.snapshot(alice.session_id()).wishlist().len(), 1);
}

#[tokio::test]
async fn test_search_lists_matches_or_says_none() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    create_test_book(state.db(), "Emma", "1815-12-23", "Available").await;
    let mut browser = TestBrowser::new(state);

    browser.open("search").await;

    let (status, body) = browser.get(&page_uri(&[("q", "dun")])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dune - 1965-08-01 (Available)"));
    assert!(!body.contains("Emma"));

    let (_, body) = browser.get(&page_uri(&[("q", "xyz")])).await;
    assert!(body.contains("No results found."));
}

#[tokio::test]
async fn test_categories_and_authors_show_their_books() {
    let state = setup_test_state().await;
    let dune = create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    create_test_category(state.db(), "Science Fiction", &[dune]).await;
    create_test_category(state.db(), "Poetry", &[]).await;
    create_test_author(state.db(), "Frank Herbert", &[dune]).await;
    let mut browser = TestBrowser::new(state);

    let (_, body) = browser.open("categories").await;
    assert!(body.contains("Science Fiction"));
    assert!(body.contains("No books in this category."));
    assert!(body.contains("Dune"));

    browser.open("home").await;
    browser.open("authors").await;
    let (status, body) = browser.get(&page_uri(&[("author", "Frank Herbert")])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Frank Herbert"));
    assert!(body.contains("Dune"));
}

#[tokio::test]
async fn test_wishlist_add_duplicate_and_remove() {
    let state = setup_test_state().await;
    let dune = create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());
    let book_id = dune.to_string();

    browser.open("books").await;

    let (status, body) = browser.post_form("/wishlist", &[("book_id", &book_id)]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dune has been added to your wishlist!"));

    let (_, body) = browser.post_form("/wishlist", &[("book_id", &book_id)]).await;
    assert!(body.contains("This book is already in your wishlist."));

    let wishlist = state.sessions.snapshot(browser.session_id()).wishlist().to_vec();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].name, "Dune");

    browser.open("home").await;
    let (_, body) = browser.open("wishlist").await;
    assert!(body.contains("Dune - 1965-08-01 (Available)"));

    let (_, body) = browser.post_form("/wishlist/remove", &[("index", "0")]).await;
    assert!(body.contains("Dune has been removed from your wishlist!"));
    assert!(body.contains("Your wishlist is empty."));

    let (status, body) = browser.post_form("/wishlist/remove", &[("index", "0")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("That wishlist entry was already removed."));
}

#[tokio::test]
async fn test_review_is_added_and_listed() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    browser.open("reviews").await;
    let (status, body) = browser
        .post_form(
            "/reviews",
            &[
                ("book", "Dune"),
                ("reviewer", "Alice"),
                ("rating", "5"),
                ("comment", "A desert classic"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your review has been added successfully!"));
    assert!(body.contains("A desert classic"));
    assert_eq!(review::Entity::find().count(state.db()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_review_keeps_non_ascii_text() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    browser.open("reviews").await;
    let (status, body) = browser
        .post_form(
            "/reviews",
            &[
                ("book", "Dune"),
                ("reviewer", "Zoë Žižek"),
                ("rating", "4"),
                ("comment", "Épique, 100% sable & épice = chef-d’œuvre"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Reviewer: Zoë Žižek"));

    let saved = review::Entity::find().all(state.db()).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].reviewer, "Zoë Žižek");
    assert_eq!(saved[0].comment, "Épique, 100% sable & épice = chef-d’œuvre");
}

#[tokio::test]
async fn test_review_with_empty_comment_is_rejected() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    browser.open("reviews").await;
    let (status, body) = browser
        .post_form(
            "/reviews",
            &[
                ("book", "Dune"),
                ("reviewer", "Alice"),
                ("rating", "4"),
                ("comment", "   "),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please fill in all fields."));
    assert_eq!(review::Entity::find().count(state.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_buy_logs_an_operation() {
    let state = setup_test_state().await;
    let dune = create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    browser.open("borrow_buy").await;
    let (status, body) = browser
        .post_form("/operations", &[("book", "Dune"), ("operation", "buy")])
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dune has been purchased successfully!"));

    let operations = operation::Entity::find().all(state.db()).await.unwrap();
    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].operation_name, "Buying");
    assert!(operations[0].end_date.is_none());

    let links = book_management::Entity::find().all(state.db()).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].book_id, dune);

    browser.open("home").await;
    let (_, body) = browser.open("operations").await;
    assert!(body.contains("Operation Type: Buying"));
    assert!(body.contains("Book Name: Dune"));
}

#[tokio::test]
async fn test_borrow_needs_both_dates() {
    let state = setup_test_state().await;
    create_test_book(state.db(), "Dune", "1965-08-01", "Available").await;
    let mut browser = TestBrowser::new(state.clone());

    browser.open("borrow_buy").await;
    let (status, body) = browser
        .post_form(
            "/operations",
            &[
                ("book", "Dune"),
                ("operation", "borrow"),
                ("start_date", "2024-03-01"),
                ("end_date", ""),
            ],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please fill in all fields."));
    assert_eq!(operation::Entity::find().count(state.db()).await.unwrap(), 0);

    let (_, body) = browser
        .post_form(
            "/operations",
            &[
                ("book", "Dune"),
                ("operation", "borrow"),
                ("start_date", "2024-03-01"),
                ("end_date", "2024-03-15"),
            ],
        )
        .await;
    assert!(body.contains("Dune has been borrowed successfully!"));

    let saved = operation::Entity::find().all(state.db()).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].operation_name, "Borrowing");
    assert_eq!(saved[0].start_date, "2024-03-01");
    assert_eq!(saved[0].end_date.as_deref(), Some("2024-03-15"));
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_state().await;
    let mut browser = TestBrowser::new(state);

    let (status, body) = browser.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "online-library");
    assert_eq!(json["database"], "ok");
}
