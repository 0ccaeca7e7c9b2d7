//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tera::Tera;

use crate::api::render;
use crate::domain::{
    AuthorRepository, BookRepository, CategoryRepository, DomainError, OperationRepository,
    ReviewRepository,
};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmCategoryRepository,
    SeaOrmOperationRepository, SeaOrmReviewRepository,
};
use crate::session::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection, opened once per process
    db: DatabaseConnection,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub author_repo: Arc<dyn AuthorRepository>,
    pub book_repo: Arc<dyn BookRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub operation_repo: Arc<dyn OperationRepository>,
    /// Live browser sessions
    pub sessions: Arc<SessionStore>,
    /// Compiled page templates
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Result<Self, DomainError> {
        let templates = render::load_templates()
            .map_err(|e| DomainError::Internal(format!("Failed to load templates: {}", e)))?;

        Ok(Self {
            category_repo: Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            author_repo: Arc::new(SeaOrmAuthorRepository::new(db.clone())),
            book_repo: Arc::new(SeaOrmBookRepository::new(db.clone())),
            review_repo: Arc::new(SeaOrmReviewRepository::new(db.clone())),
            operation_repo: Arc::new(SeaOrmOperationRepository::new(db.clone())),
            sessions: Arc::new(SessionStore::new()),
            templates: Arc::new(templates),
            db,
        })
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
