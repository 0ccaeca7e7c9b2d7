use tera::Context;

use crate::domain::{Book, DomainError};
use crate::infrastructure::AppState;

/// Name search. A blank query shows the input without running a search.
pub async fn context(state: &AppState, query: Option<&str>) -> Result<Context, DomainError> {
    let query = query.map(str::trim).unwrap_or_default();

    let results: Vec<Book> = if query.is_empty() {
        Vec::new()
    } else {
        state.book_repo.search_by_name(query).await?
    };

    let mut context = Context::new();
    context.insert("query", query);
    context.insert("searched", &!query.is_empty());
    context.insert("results", &results);
    Ok(context)
}
