use serde::Serialize;
use tera::Context;

use crate::domain::{Book, DomainError};
use crate::infrastructure::AppState;

#[derive(Serialize)]
struct CategoryPanel {
    id: i32,
    name: String,
    books: Vec<Book>,
}

/// One expandable panel per category with the books filed under it
pub async fn context(state: &AppState) -> Result<Context, DomainError> {
    let categories = state.category_repo.find_all().await?;

    let mut panels = Vec::with_capacity(categories.len());
    for category in categories {
        let books = state.category_repo.find_books(category.id).await?;
        panels.push(CategoryPanel {
            id: category.id,
            name: category.name,
            books,
        });
    }

    let mut context = Context::new();
    context.insert("categories", &panels);
    Ok(context)
}
