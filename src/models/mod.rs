pub mod author;
pub mod book;
pub mod book_authors;
pub mod book_categories;
pub mod book_management;
pub mod category;
pub mod operation;
pub mod review;
