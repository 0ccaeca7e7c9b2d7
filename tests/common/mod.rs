#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use online_library::api;
use online_library::db;
use online_library::infrastructure::AppState;
use online_library::models::{author, book, book_authors, book_categories, category};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tower::util::ServiceExt; // for `oneshot`
use uuid::Uuid;

// Helper to create a test database
pub async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

// Helper to create a test app state
pub async fn setup_test_state() -> AppState {
    AppState::new(setup_test_db().await).expect("Failed to build state")
}

// Helper to create a test book
pub async fn create_test_book(db: &DatabaseConnection, name: &str, date: &str, status: &str) -> i32 {
    let book = book::ActiveModel {
        name: Set(name.to_string()),
        publication_date: Set(Some(date.to_string())),
        availability_status: Set(status.to_string()),
        ..Default::default()
    };
    book.insert(db).await.expect("Failed to create book").id
}

// Helper to create an author linked to books
pub async fn create_test_author(db: &DatabaseConnection, name: &str, book_ids: &[i32]) -> i32 {
    let author = author::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create author");

    for book_id in book_ids {
        book_authors::ActiveModel {
            book_id: Set(*book_id),
            author_id: Set(author.id),
        }
        .insert(db)
        .await
        .expect("Failed to link author");
    }
    author.id
}

// Helper to create a category holding books
pub async fn create_test_category(db: &DatabaseConnection, name: &str, book_ids: &[i32]) -> i32 {
    let category = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create category");

    for book_id in book_ids {
        book_categories::ActiveModel {
            book_id: Set(*book_id),
            category_id: Set(category.id),
        }
        .insert(db)
        .await
        .expect("Failed to link category");
    }
    category.id
}

/// Encode form fields the way a browser does
pub fn form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Root URI carrying a query string, e.g. `/?author=Frank%20Herbert`
pub fn page_uri(params: &[(&str, &str)]) -> String {
    format!("/?{}", form(params))
}

/// Drives the router like a single browser: the session cookie is kept between requests
pub struct TestBrowser {
    app: Router,
    cookie: Option<String>,
}

impl TestBrowser {
    pub fn new(state: AppState) -> Self {
        Self {
            app: api::router(state),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).method("GET");
        self.send(req, Body::empty()).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(req, Body::from(form(fields))).await
    }

    /// Navigate through the Home buttons
    pub async fn open(&mut self, page: &str) -> (StatusCode, String) {
        let (status, _) = self.post_form("/navigate", &[("page", page)]).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        self.get("/").await
    }

    pub fn session_id(&self) -> Uuid {
        let cookie = self.cookie.as_deref().expect("no session cookie yet");
        let value = cookie.split_once('=').map(|(_, v)| v).unwrap_or_default();
        Uuid::parse_str(value).expect("session cookie holds a UUID")
    }

    async fn send(
        &mut self,
        mut req: axum::http::request::Builder,
        body: Body,
    ) -> (StatusCode, String) {
        if let Some(cookie) = &self.cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let response = self
            .app
            .clone()
            .oneshot(req.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}
