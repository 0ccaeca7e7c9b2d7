//! Repository trait definitions
//!
//! These traits define the contract for catalog access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::DomainError;

/// Book data as displayed by every catalog page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub publication_date: Option<String>,
    pub availability_status: String,
}

/// Category data for the categories page
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Author data for the authors page
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// A stored review
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    pub reviewer: String,
    pub rating: i32,
    pub comment: String,
    pub review_date: String,
}

/// Input for creating a review; the book is referenced by its exact name
#[derive(Debug, Clone)]
pub struct NewReview {
    pub book_name: String,
    pub reviewer: String,
    pub rating: i32,
    pub comment: String,
    pub review_date: String,
}

/// Kind of a logged transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    Buy,
    Borrow,
}

impl OperationKind {
    /// Name stored in `operations.operation_name`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Buy => "Buying",
            OperationKind::Borrow => "Borrowing",
        }
    }
}

impl std::str::FromStr for OperationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(OperationKind::Buy),
            "borrow" => Ok(OperationKind::Borrow),
            other => Err(DomainError::Validation(format!(
                "Unknown operation '{}'",
                other
            ))),
        }
    }
}

/// Input for recording a Buy or Borrow against a book
#[derive(Debug, Clone)]
pub struct NewOperation {
    pub book_id: i32,
    pub kind: OperationKind,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// An operation joined with the name of the book it concerns
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub id: i32,
    pub operation_name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub book_id: i32,
    pub book_name: String,
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find all categories ordered by name
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Find the books filed under a category
    async fn find_books(&self, category_id: i32) -> Result<Vec<Book>, DomainError>;
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors ordered by name
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find the books of every author carrying exactly this name
    async fn find_books_by_name(&self, author_name: &str) -> Result<Vec<Book>, DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books ordered by name
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Substring search on the book name
    async fn search_by_name(&self, query: &str) -> Result<Vec<Book>, DomainError>;

    /// Find the first book with exactly this name
    async fn find_by_name(&self, name: &str) -> Result<Option<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;
}

/// Repository trait for Review entity
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find the reviews of every book carrying exactly this name
    async fn find_by_book_name(&self, book_name: &str) -> Result<Vec<Review>, DomainError>;

    /// Create a review; fails with `NotFound` when the book name resolves to no row
    async fn create(&self, review: NewReview) -> Result<Review, DomainError>;
}

/// Repository trait for Operation and its BookManagement link
#[async_trait]
pub trait OperationRepository: Send + Sync {
    /// Insert the operation and its book link atomically
    async fn record(&self, operation: NewOperation) -> Result<OperationRecord, DomainError>;

    /// Find all operations joined with their book names
    async fn find_all(&self) -> Result<Vec<OperationRecord>, DomainError>;
}
