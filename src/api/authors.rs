use tera::Context;

use super::pages::select_or_first;
use crate::domain::{Book, DomainError};
use crate::infrastructure::AppState;

pub async fn context(state: &AppState, requested: Option<&str>) -> Result<Context, DomainError> {
    let authors = state.author_repo.find_all().await?;

    let mut names: Vec<String> = authors.into_iter().map(|a| a.name).collect();
    names.dedup();
    let selected = select_or_first(&names, requested);

    let books: Vec<Book> = match &selected {
        Some(name) => state.author_repo.find_books_by_name(name).await?,
        None => Vec::new(),
    };

    let mut context = Context::new();
    context.insert("authors", &names);
    context.insert("selected_author", &selected.unwrap_or_default());
    context.insert("books", &books);
    Ok(context)
}
